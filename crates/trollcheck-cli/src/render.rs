//! Text and JSON rendering of lookup results.

use serde::Serialize;
use std::fmt::Write;
use trollcheck_core::TrollcheckError;
use trollcheck_lookup::{Query, Verdict};
use trollcheck_registry::SupportTable;

#[derive(Serialize)]
struct Report<'a> {
    query: &'a Query,
    #[serde(flatten)]
    verdict: &'a Verdict,
}

pub fn verdict_text(query: &Query, verdict: &Verdict) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "iOS Version: {}", query.version_text);

    match verdict {
        Verdict::Supported { range, links } => {
            let _ = writeln!(out, "TrollStore Support: Supported");
            let _ = writeln!(out, "{}", range);

            let _ = writeln!(out, "\nOfficial Websites:");
            for link in links {
                let _ = writeln!(out, "  {} Official Website: {}", link.tool, or_none(&link.website));
            }

            let _ = writeln!(out, "\nInstallation Guides:");
            for link in links {
                let _ = writeln!(out, "  {} Installation Guide: {}", link.tool, or_none(&link.guide));
            }
        }
        Verdict::NotSupported => {
            let _ = writeln!(out, "TrollStore Support: Not Supported");
        }
    }
    out
}

fn or_none(url: &str) -> &str {
    if url.is_empty() {
        "(none)"
    } else {
        url
    }
}

pub fn verdict_json(query: &Query, verdict: &Verdict) -> Result<String, TrollcheckError> {
    Ok(serde_json::to_string_pretty(&Report { query, verdict })?)
}

pub fn table_text(table: &SupportTable) -> String {
    let mut out = String::new();
    for record in table {
        let tools: Vec<&str> = record.supported.iter().map(|t| t.tool.as_str()).collect();
        let tools = if tools.is_empty() {
            "-".to_string()
        } else {
            tools.join(", ")
        };
        let _ = writeln!(
            out,
            "{} .. {} | {} | {}",
            record.from_version, record.to_version, record.platforms, tools
        );
    }
    out
}

pub fn table_json(table: &SupportTable) -> Result<String, TrollcheckError> {
    Ok(serde_json::to_string_pretty(table)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trollcheck_core::Architecture;
    use trollcheck_lookup::lookup;

    #[test]
    fn test_supported_text() {
        let table = SupportTable::builtin();
        let query = Query::new("15.0", Architecture::Arm64);
        let text = verdict_text(&query, &lookup(&table, &query));

        assert!(text.starts_with("iOS Version: 15.0\n"));
        assert!(text.contains("TrollStore Support: Supported"));
        assert!(text.contains("Supported from 15.0 to 15.0"));
        assert!(text.contains("TrollInstallerX Installation Guide: https://ios.cfw.guide/installing-trollstore-trollinstallerx"));
    }

    #[test]
    fn test_not_supported_text() {
        let query = Query::new("13.0", Architecture::Arm64);
        let text = verdict_text(&query, &Verdict::NotSupported);
        assert_eq!(text, "iOS Version: 13.0\nTrollStore Support: Not Supported\n");
    }

    #[test]
    fn test_json_report() {
        let query = Query::new("13.0", Architecture::Arm64e).beta(true);
        let json: serde_json::Value = serde_json::from_str(&verdict_json(&query, &Verdict::NotSupported).unwrap()).unwrap();

        assert_eq!(json["status"], "NOT_SUPPORTED");
        assert_eq!(json["query"]["architecture"], "arm64e");
        assert_eq!(json["query"]["is_beta"], true);
    }

    #[test]
    fn test_table_json_round_trip() {
        let table = SupportTable::builtin();
        let json = table_json(&table).unwrap();
        let parsed: SupportTable = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, table);
        assert!(parsed.records()[2].covers(Architecture::Arm64e));
    }

    #[test]
    fn test_table_json_without_architectures() {
        // architectures come from the platform text when omitted
        let parsed: SupportTable = serde_json::from_str(r#"{
            "revision": "json",
            "records": [{"from_version": "15.0", "to_version": "15.0", "platforms": "arm64e (A12)"}]
        }"#).unwrap();

        assert!(parsed.records()[0].covers(Architecture::Arm64e));
        assert!(!parsed.records()[0].covers(Architecture::Arm64));
    }

    #[test]
    fn test_table_text_lists_every_row() {
        let table = SupportTable::builtin();
        let text = table_text(&table);
        assert_eq!(text.lines().count(), table.len());
        assert!(text.lines().next().unwrap().ends_with("| -"));
    }
}
