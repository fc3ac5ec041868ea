/// Tests for runner module
#[cfg(test)]
mod tests {
    use crate::config::{ReportConfig, SourceColumns};
    use crate::error::ReportError;
    use crate::report::ReportOptions;
    use calamine::{Reader, Xlsx, open_workbook};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const HEADER: &str = "Campaign Name,Amount Spent (ZAR),Link Clicks,Impressions\n";

    /// Helper to create a config pointing at scratch paths
    fn create_config(input: PathBuf, output: &Path) -> ReportConfig {
        ReportConfig {
            input_path: input,
            source_columns: SourceColumns::default(),
            report: ReportOptions { output_dir: output.to_path_buf(), cpc_threshold: 20.0 },
            verbose: false,
            json: false,
        }
    }

    fn write_csv(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn output_files(dir: &Path) -> Vec<PathBuf> {
        match fs::read_dir(dir) {
            Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
            Err(_) => Vec::new(),
        }
    }

    #[test]
    fn test_pipeline_writes_report() {
        let temp = TempDir::new().unwrap();
        let input = write_csv(
            temp.path(),
            "campaigns.csv",
            &format!("{}Summer Sale,1000.00,50,2500\nWinter Promo,500.00,25,1250\n", HEADER),
        );
        let out = temp.path().join("output");

        let report = crate::runner::run_pipeline(&create_config(input, &out)).expect("pipeline should succeed");

        assert_eq!(report.summary.campaigns, 2);
        assert_eq!(report.summary.total_spend, 1500.0);
        assert_eq!(report.summary.average_cpc, 20.0);
        assert_eq!(report.highlighted, 0);
        assert_eq!(output_files(&out), vec![report.path.clone()]);

        let workbook: Xlsx<_> = open_workbook(&report.path).unwrap();
        assert_eq!(workbook.sheet_names().len(), 2);
    }

    #[test]
    fn test_pipeline_counts_highlighted_rows() {
        let temp = TempDir::new().unwrap();
        let input = write_csv(
            temp.path(),
            "campaigns.csv",
            &format!("{}Cheap,100,10,1000\nExpensive,500,10,1000\nExact,200,10,1000\n", HEADER),
        );
        let out = temp.path().join("output");

        let report = crate::runner::run_pipeline(&create_config(input, &out)).unwrap();
        assert_eq!(report.highlighted, 1);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("output");

        let err = crate::runner::run_pipeline(&create_config(temp.path().join("missing.csv"), &out)).unwrap_err();

        assert!(matches!(err, ReportError::NotFound { .. }));
        assert!(output_files(&out).is_empty());
    }

    #[test]
    fn test_schema_failure_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let input = write_csv(temp.path(), "campaigns.csv", "Campaign Name,Amount Spent (ZAR)\nA,10\n");
        let out = temp.path().join("output");

        let err = crate::runner::run_pipeline(&create_config(input, &out)).unwrap_err();

        match err {
            ReportError::Schema { missing } => {
                assert_eq!(missing, vec!["Link Clicks".to_string(), "Impressions".to_string()]);
            }
            other => panic!("expected schema error, got {:?}", other),
        }
        assert!(output_files(&out).is_empty());
    }

    #[test]
    fn test_empty_input_is_validation_error() {
        let temp = TempDir::new().unwrap();
        let input = write_csv(temp.path(), "empty.csv", "");
        let out = temp.path().join("output");

        let err = crate::runner::run_pipeline(&create_config(input, &out)).unwrap_err();
        assert!(matches!(err, ReportError::EmptyInput { .. }));
        assert_eq!(err.kind(), "validation");
    }
}
