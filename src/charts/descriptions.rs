//! Markdown commentary shown beneath each chart.

use super::ChartId;

/// Returns the markdown description for a chart.
///
/// The match is exhaustive, so adding a chart without its text fails to
/// compile.
pub fn description(id: ChartId) -> &'static str {
    match id {
        ChartId::AgeVsSalary => {
            "Each point is one employee, placed by **age** and **salary** and coloured by sex. \
             Hover a point to see the employee's name, department and position. \
             Look for whether pay rises with age or clusters by role instead."
        }
        ChartId::SalaryByDepartment => {
            "Box plots of **salary** for every department, with each employee drawn as a point. \
             The box spans the middle half of salaries; whiskers reach the furthest salaries \
             within 1.5 times the interquartile range."
        }
        ChartId::BirthDateDistribution => {
            "Distribution of **dates of birth** split by sex, in equal-width bins. \
             The rug below the bars marks every individual birth date."
        }
        ChartId::AbsencesBySex => {
            "Box plots of recorded **absences** per sex, with every employee drawn as a point."
        }
        ChartId::SatisfactionBySource => {
            "Average **employment satisfaction** (1 to 5) of employees hired through each \
             recruitment source. Sources with few hires can swing widely."
        }
        ChartId::SalaryDistribution => {
            "Histogram of **salaries** across the whole workforce in equal-width bins."
        }
        ChartId::PerformanceScores => {
            "Share of employees at each **performance score**."
        }
        ChartId::TerminationsByDepartment => {
            "Number of **terminated** employees per department. \
             Departments with no terminations are not shown."
        }
        ChartId::TenureVsSalary => {
            "Each point is one employee, placed by **tenure** in years and **salary**, \
             with an ordinary least squares trendline. \
             Employees without a usable hire date or salary are left out."
        }
        ChartId::PositionsBySex => {
            "Headcount per **position**, with one bar for each sex side by side."
        }
    }
}
