//! CLI commands for the summary and insights reports

use crate::config::Settings;
use crate::display::report::{format_header, separator};
use crate::display::{format_chart, format_money_colored, format_store};
use crate::error::BusinessResult;
use crate::services::ReportService;

use super::input::ItemArgs;

const REPORT_WIDTH: usize = 60;
const CHART_WIDTH: usize = 30;

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, args: ItemArgs) -> BusinessResult<()> {
    let session = args.into_session()?;
    let service = ReportService::new(&session, settings);
    let currency = settings.currency_code.as_str();

    println!("{}", format_header("Business Summary", REPORT_WIDTH));
    println!("{}", separator(REPORT_WIDTH));
    println!("{}", format_store(session.revenue(), currency));
    println!("{}", format_store(session.expenses(), currency));

    let summary = service.summary();
    print!("{}", summary.format_terminal());
    println!(
        "Net: {}",
        format_money_colored(service.aggregate().profit, currency)
    );
    println!();

    println!("Revenue vs Expenses vs Profit");
    println!("{}", separator(REPORT_WIDTH));
    print!("{}", format_chart(&service.chart_bars(), CHART_WIDTH));

    Ok(())
}

/// Handle the insights command
pub fn handle_insights_command(settings: &Settings, args: ItemArgs) -> BusinessResult<()> {
    let session = args.into_session()?;
    let service = ReportService::new(&session, settings);

    print!("{}", service.insights().format_terminal(&settings.currency_code));

    Ok(())
}
