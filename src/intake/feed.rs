//! Job feed: the sole producer of the admission queue.
//!
//! Reads `id, burst, memory` lines (or already-parsed records), validates
//! each one and pushes it to the admission queue. A bad record is logged,
//! recorded in the [`FeedReport`] and skipped; the feed keeps going. A line
//! that is not valid UTF-8 is just another bad record. Only a source that
//! cannot be opened or read stops the feed.

use std::path::Path;

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::admission::AdmissionSender;
use crate::config::SimulationConfig;
use crate::error::{RecordError, Result, SimError};
use crate::models::JobRecord;
use crate::validation::{parse_record_line, validate_record, RecordLimits};

/// Summary of one feed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedReport {
    /// Records pushed to the admission queue.
    pub admitted: usize,
    /// Records dropped, in source order.
    pub rejected: Vec<RecordError>,
    /// Whether the feed stopped early at the record limit.
    pub limit_reached: bool,
}

impl FeedReport {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Validates and forwards job records.
#[derive(Debug, Clone)]
pub struct JobFeed {
    limits: RecordLimits,
    max_records: usize,
}

impl JobFeed {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            limits: RecordLimits::from_config(config),
            max_records: config.max_records,
        }
    }

    /// Opens `path` and feeds its lines.
    ///
    /// Fails with [`SimError::SourceUnavailable`] if the file cannot be opened.
    pub async fn feed_file(&self, path: &Path, sender: AdmissionSender) -> Result<FeedReport> {
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| SimError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %path.display(), "Reading job file");
        self.feed_lines(BufReader::new(file), sender).await
    }

    /// Feeds `id, burst, memory` lines. Blank lines are skipped.
    pub async fn feed_lines<R>(&self, mut reader: R, sender: AdmissionSender) -> Result<FeedReport>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut report = FeedReport::default();
        let mut buf = Vec::new();
        let mut line_no = 0;

        while !self.limit_reached(&report) {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            line_no += 1;
            let parsed = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_record_line(line, line_no, &self.limits),
                Err(_) => Err(RecordError::Malformed {
                    line: line_no,
                    reason: "line is not valid UTF-8".to_string(),
                }),
            };
            self.offer(parsed, &sender, &mut report).await?;
        }

        self.finish(report, sender)
    }

    /// Feeds already-parsed records, in iteration order.
    pub async fn feed_records<I>(&self, records: I, sender: AdmissionSender) -> Result<FeedReport>
    where
        I: IntoIterator<Item = JobRecord>,
    {
        let mut report = FeedReport::default();

        for (idx, record) in records.into_iter().enumerate() {
            if self.limit_reached(&report) {
                break;
            }
            let checked = validate_record(&record, idx + 1, &self.limits).map(|_| record);
            self.offer(checked, &sender, &mut report).await?;
        }

        self.finish(report, sender)
    }

    async fn offer(
        &self,
        parsed: std::result::Result<JobRecord, RecordError>,
        sender: &AdmissionSender,
        report: &mut FeedReport,
    ) -> Result<()> {
        match parsed {
            Ok(record) => {
                sender.push(record).await?;
                report.admitted += 1;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Record rejected");
                report.rejected.push(err);
            }
        }
        Ok(())
    }

    fn limit_reached(&self, report: &FeedReport) -> bool {
        report.admitted >= self.max_records
    }

    fn finish(&self, mut report: FeedReport, sender: AdmissionSender) -> Result<FeedReport> {
        report.limit_reached = self.limit_reached(&report);
        sender.close();
        tracing::info!(
            admitted = report.admitted,
            rejected = report.rejected_count(),
            limit_reached = report.limit_reached,
            "Job feed finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::admission;

    async fn drain(mut rx: admission::AdmissionReceiver) -> Vec<JobRecord> {
        let mut out = Vec::new();
        while let Some(record) = rx.take().await.unwrap() {
            out.push(record);
        }
        out
    }

    #[tokio::test]
    async fn test_feed_lines_skips_bad_records() {
        let config = SimulationConfig::default();
        let (tx, rx) = admission::channel(config.max_records, config.memory_ceiling_mb);
        let input = "1, 24, 10\n2, 3, 9000\n\nnot,a,job\n3, 3, 5\n";

        let report = JobFeed::new(&config).feed_lines(input.as_bytes(), tx).await.unwrap();

        assert_eq!(report.admitted, 2);
        assert_eq!(report.rejected_count(), 2);
        assert!(matches!(
            report.rejected[0],
            RecordError::MemorySizeExceeded {
                id: 2,
                requested_mb: 9000,
                ceiling_mb: 8192
            }
        ));
        assert!(matches!(report.rejected[1], RecordError::Malformed { line: 4, .. }));
        assert!(!report.limit_reached);

        let ids: Vec<u32> = drain(rx).await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_skipped() {
        let config = SimulationConfig::default();
        let (tx, rx) = admission::channel(config.max_records, config.memory_ceiling_mb);
        let input: &[u8] = b"1, 4, 10\n2, \xff, 10\n3, 2, 10\n";

        let report = JobFeed::new(&config).feed_lines(input, tx).await.unwrap();

        assert_eq!(report.admitted, 2);
        assert!(matches!(
            report.rejected.as_slice(),
            [RecordError::Malformed { line: 2, .. }]
        ));
        let ids: Vec<u32> = drain(rx).await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_crlf_and_missing_final_newline() {
        let config = SimulationConfig::default();
        let (tx, rx) = admission::channel(config.max_records, config.memory_ceiling_mb);
        let input = "1, 4, 10\r\n\r\n2, 2, 10";

        let report = JobFeed::new(&config).feed_lines(input.as_bytes(), tx).await.unwrap();

        assert_eq!(report.admitted, 2);
        assert!(report.rejected.is_empty());
        assert_eq!(drain(rx).await.len(), 2);
    }

    #[tokio::test]
    async fn test_burst_above_limit_is_skipped() {
        let config = SimulationConfig::default().with_max_burst_time(10);
        let (tx, rx) = admission::channel(config.max_records, config.memory_ceiling_mb);
        let input = "1, 4000000000000000000, 1\n2, 10, 1\n";

        let report = JobFeed::new(&config).feed_lines(input.as_bytes(), tx).await.unwrap();

        assert_eq!(report.admitted, 1);
        assert!(matches!(report.rejected[0], RecordError::Malformed { line: 1, .. }));
        let ids: Vec<u32> = drain(rx).await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn test_feed_stops_at_record_limit() {
        let config = SimulationConfig::default().with_max_records(2);
        let (tx, rx) = admission::channel(config.max_records, config.memory_ceiling_mb);
        // Bad record does not count toward the limit
        let input = "1,1,1\n2,1,99999\n3,1,1\n4,1,1\n";

        let report = JobFeed::new(&config).feed_lines(input.as_bytes(), tx).await.unwrap();

        assert_eq!(report.admitted, 2);
        assert!(report.limit_reached);
        let ids: Vec<u32> = drain(rx).await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_feed_records() {
        let config = SimulationConfig::default();
        let (tx, rx) = admission::channel(config.max_records, config.memory_ceiling_mb);
        let records = vec![
            JobRecord::new(1, 5, 10),
            JobRecord::new(2, 5, 9000),
            JobRecord::new(3, 2, 8192),
        ];

        let report = JobFeed::new(&config).feed_records(records, tx).await.unwrap();

        assert_eq!(report.admitted, 2);
        assert_eq!(report.rejected_count(), 1);
        let ids: Vec<u32> = drain(rx).await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_missing_file_is_source_unavailable() {
        let config = SimulationConfig::default();
        let (tx, _rx) = admission::channel(config.max_records, config.memory_ceiling_mb);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = JobFeed::new(&config).feed_file(&path, tx).await.unwrap_err();
        match err {
            SimError::SourceUnavailable { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_feed_file() {
        let config = SimulationConfig::default();
        let (tx, rx) = admission::channel(config.max_records, config.memory_ceiling_mb);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.txt");
        std::fs::write(&path, "1,24,10\n2,3,5\n3,3,5\n").unwrap();

        let report = JobFeed::new(&config).feed_file(&path, tx).await.unwrap();
        assert_eq!(report.admitted, 3);
        assert_eq!(drain(rx).await.len(), 3);
    }
}
