/// Dashboard widgets: top bar, filter selector, summary cards, projects
/// table (`panels`) and the cost-by-supervisor bar chart (`chart`).

pub mod chart;
pub mod panels;
