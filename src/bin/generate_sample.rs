//! Regenerates the bundled `projects.csv` demo dataset.
//!
//! The output includes the defect rows the ingestion pipeline has to
//! tolerate: blank NTP numbers (dropped), non-numeric costs (coerced to 0),
//! and blank supervisors (grouped as "Unassigned").

use csv::Writer;

/// Minimal deterministic LCG so the sample file is reproducible.
struct SampleRng(u64);

impl SampleRng {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

const SUPERVISORS: [&str; 4] = ["Dana Whitfield", "Marcus Lee", "Priya Raman", "Tom Okafor"];
const REGIONS: [&str; 3] = ["North", "Central", "South"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SampleRng(0x5eed);
    let mut writer = Writer::from_path("projects.csv")?;

    writer.write_record([
        "NTP Number",
        "Assigned Supervisor",
        "SOW Estimated Cost",
        "Region",
        "Status",
    ])?;

    for n in 1..=40u64 {
        let id = if n % 13 == 0 {
            String::new()
        } else {
            format!("NTP-{n:04}")
        };
        let supervisor = if n % 9 == 0 {
            ""
        } else {
            SUPERVISORS[rng.next(4) as usize]
        };
        let cost = if n % 11 == 0 {
            "TBD".to_string()
        } else {
            format!("{}.{:02}", 5_000 + rng.next(95_000), rng.next(100))
        };
        let region = REGIONS[rng.next(3) as usize];
        let status = if rng.next(5) == 0 { "On Hold" } else { "Active" };

        writer.write_record([id.as_str(), supervisor, cost.as_str(), region, status])?;
    }

    writer.flush()?;
    println!("wrote projects.csv");
    Ok(())
}
