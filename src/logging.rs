// Copyright (C) Brian G. Milnes 2025

//! Logging infrastructure for stubforge tools
//!
//! Provides consistent logging to files organized by tool and date:
//! - logs/<tool-name>/<date>/run-<timestamp>.log
//!
//! Every message is echoed to stdout; the file copy is the audit trail
//! for a run. If the log file cannot be created the run continues with
//! stdout only.

pub mod logging {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use anyhow::Result;
    use chrono::{DateTime, Local};

    /// Logger for one stubforge tool run
    pub struct RunLog {
        log_file: Option<fs::File>,
        log_path: Option<PathBuf>,
        start_time: DateTime<Local>,
    }

    impl RunLog {
        /// Create a disabled logger (stdout only, no file output)
        pub fn disabled() -> Self {
            RunLog {
                log_file: None,
                log_path: None,
                start_time: Local::now(),
            }
        }

        /// Create a new logger for a tool
        ///
        /// Creates log directory structure: logs/<tool-name>/<YYYY-MM-DD>/run-<HH-MM-SS>.log
        /// If log creation fails, continues without file logging.
        pub fn new(tool_name: &str) -> Self {
            let start_time = Local::now();

            let (log_file, log_path) = match Self::create_log_file(tool_name, &start_time) {
                Ok((file, path)) => (Some(file), Some(path)),
                Err(e) => {
                    eprintln!("Warning: could not create log file: {e}");
                    eprintln!("Continuing without file logging...");
                    (None, None)
                }
            };

            RunLog {
                log_file,
                log_path,
                start_time,
            }
        }

        fn create_log_file(tool_name: &str, start_time: &DateTime<Local>) -> Result<(fs::File, PathBuf)> {
            let date_str = start_time.format("%Y-%m-%d").to_string();
            let time_str = start_time.format("%H-%M-%S").to_string();

            let log_dir = PathBuf::from("logs").join(tool_name).join(&date_str);
            fs::create_dir_all(&log_dir)?;

            let log_path = log_dir.join(format!("run-{time_str}.log"));
            let log_file = fs::File::create(&log_path)?;

            Ok((log_file, log_path))
        }

        /// Log a message to both stdout and the log file
        pub fn log(&mut self, message: &str) {
            println!("{message}");

            if let Some(ref mut file) = self.log_file {
                let _ = writeln!(file, "{message}");
            }
        }

        /// Get the path to the log file (if file logging is enabled)
        pub fn log_path(&self) -> Option<&Path> {
            self.log_path.as_deref()
        }

        /// Finalize the log with summary information and the run verdict
        pub fn finalize(&mut self, summary: &str, success: bool) {
            let end_time = Local::now();
            let duration = end_time.signed_duration_since(self.start_time);

            self.log("");
            self.log("=== Run Summary ===");
            self.log(summary);
            self.log(&format!("Result: {}", if success { "success" } else { "failure" }));
            self.log(&format!("Started: {}", self.start_time.format("%Y-%m-%d %H:%M:%S")));
            self.log(&format!("Ended: {}", end_time.format("%Y-%m-%d %H:%M:%S")));
            self.log(&format!("Duration: {}ms", duration.num_milliseconds()));

            if let Some(ref path) = self.log_path {
                self.log(&format!("Log saved to: {}", path.display()));
            }
        }
    }

    impl Drop for RunLog {
        fn drop(&mut self) {
            if let Some(ref mut file) = self.log_file {
                let _ = file.flush();
            }
        }
    }
}
