//! Chat command vocabulary.

use serde::{Deserialize, Serialize};

use crate::relative::RelativePeriod;

/// Closed set of command tags. Serialized names are the wire vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    AddCategory,
    DeleteLast,
    ReportWeekly,
    ReportMonthly,
    ReportYearly,
    ReportCustom,
    TotalToday,
    TotalWeek,
    TotalMonth,
    TotalYear,
    TotalCustom,
    ListCategories,
    Help,
    SummaryToday,
    SummaryWeek,
    SummaryMonth,
    SummaryYear,
    SummaryCustom,
    History,
    CompareWeek,
    CompareMonth,
    CompareCustom,
}

impl CommandKind {
    pub const ALL: [CommandKind; 22] = [
        CommandKind::AddCategory,
        CommandKind::DeleteLast,
        CommandKind::ReportWeekly,
        CommandKind::ReportMonthly,
        CommandKind::ReportYearly,
        CommandKind::ReportCustom,
        CommandKind::TotalToday,
        CommandKind::TotalWeek,
        CommandKind::TotalMonth,
        CommandKind::TotalYear,
        CommandKind::TotalCustom,
        CommandKind::ListCategories,
        CommandKind::Help,
        CommandKind::SummaryToday,
        CommandKind::SummaryWeek,
        CommandKind::SummaryMonth,
        CommandKind::SummaryYear,
        CommandKind::SummaryCustom,
        CommandKind::History,
        CommandKind::CompareWeek,
        CommandKind::CompareMonth,
        CommandKind::CompareCustom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::AddCategory => "add_category",
            CommandKind::DeleteLast => "delete_last",
            CommandKind::ReportWeekly => "report_weekly",
            CommandKind::ReportMonthly => "report_monthly",
            CommandKind::ReportYearly => "report_yearly",
            CommandKind::ReportCustom => "report_custom",
            CommandKind::TotalToday => "total_today",
            CommandKind::TotalWeek => "total_week",
            CommandKind::TotalMonth => "total_month",
            CommandKind::TotalYear => "total_year",
            CommandKind::TotalCustom => "total_custom",
            CommandKind::ListCategories => "list_categories",
            CommandKind::Help => "help",
            CommandKind::SummaryToday => "summary_today",
            CommandKind::SummaryWeek => "summary_week",
            CommandKind::SummaryMonth => "summary_month",
            CommandKind::SummaryYear => "summary_year",
            CommandKind::SummaryCustom => "summary_custom",
            CommandKind::History => "history",
            CommandKind::CompareWeek => "compare_week",
            CommandKind::CompareMonth => "compare_month",
            CommandKind::CompareCustom => "compare_custom",
        }
    }

    /// Commands whose arguments are a period description.
    pub fn takes_period(&self) -> bool {
        matches!(
            self,
            CommandKind::ReportCustom
                | CommandKind::TotalCustom
                | CommandKind::SummaryCustom
                | CommandKind::CompareCustom
        )
    }

    /// Fixed window of the non-custom period commands.
    pub fn relative_period(&self) -> Option<RelativePeriod> {
        match self {
            CommandKind::TotalToday | CommandKind::SummaryToday => Some(RelativePeriod::Today),
            CommandKind::ReportWeekly
            | CommandKind::TotalWeek
            | CommandKind::SummaryWeek
            | CommandKind::CompareWeek => Some(RelativePeriod::Week),
            CommandKind::ReportMonthly
            | CommandKind::TotalMonth
            | CommandKind::SummaryMonth
            | CommandKind::CompareMonth => Some(RelativePeriod::Month),
            CommandKind::ReportYearly | CommandKind::TotalYear | CommandKind::SummaryYear => {
                Some(RelativePeriod::Year)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommandKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown command tag: {s}"))
    }
}

/// A resolved command and whatever text followed its prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: CommandKind,
    pub args: Option<String>,
}

impl Command {
    pub fn new(name: CommandKind, args: Option<String>) -> Self {
        Self {
            name,
            args: args.filter(|a| !a.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_as_str() {
        for kind in CommandKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(kind.as_str().parse::<CommandKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_period_commands() {
        let custom: Vec<_> = CommandKind::ALL
            .into_iter()
            .filter(CommandKind::takes_period)
            .collect();
        assert_eq!(
            custom,
            vec![
                CommandKind::ReportCustom,
                CommandKind::TotalCustom,
                CommandKind::SummaryCustom,
                CommandKind::CompareCustom,
            ]
        );
        assert_eq!(
            CommandKind::ReportWeekly.relative_period(),
            Some(RelativePeriod::Week)
        );
        assert_eq!(CommandKind::History.relative_period(), None);
    }

    #[test]
    fn test_blank_args_become_none() {
        let cmd = Command::new(CommandKind::Help, Some("   ".into()));
        assert_eq!(cmd.args, None);
    }
}
