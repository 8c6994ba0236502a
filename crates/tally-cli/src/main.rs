use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tokio::time::{Duration, sleep};

use tally_core::app::{Emitter, supervisor};
use tally_core::domain::{
    GroupMetrics, GroupName, MetricPayload, MetricsError, TaskIoMetrics, TaskName, TransferKind,
};
use tally_core::impls::WriterSink;
use tally_core::observability::init_tracing;
use tally_core::ports::{IdGenerator, SystemClock, UlidGenerator};
use tally_core::MetricsConfig;

/// tally-cli の引数（不正な引数は clap が終了コード 2 で弾く）
#[derive(Parser, Debug)]
#[command(name = "tally-cli")]
#[command(about = "Emit task I/O and group metrics for one simulated retry")]
struct Args {
    /// Group the simulated task belongs to
    #[arg(default_value = "g1")]
    group: String,

    /// Task name
    #[arg(default_value = "t1")]
    task: String,

    /// Resource the simulated download reads
    #[arg(default_value = "s3://bucket/key")]
    url: String,
}

/// 1 回の retry を模擬して、task の I/O と group の window を stdout に出す
async fn run(config: &MetricsConfig, args: Args) -> Result<(), MetricsError> {
    let emitter = Emitter::new(config.source()?, WriterSink::stdout());
    let retry_id = UlidGenerator::new(SystemClock).generate_retry_id();
    tracing::info!(source = %emitter.source(), %retry_id, "retry started");

    let group_start = Utc::now();

    // (A) task の download（ここでは sleep で代用）
    let task_start = Utc::now();
    sleep(Duration::from_millis(50)).await;
    let task_end = Utc::now();

    let io = TaskIoMetrics {
        retry_id: retry_id.clone(),
        group_name: GroupName::new(args.group),
        task_name: TaskName::new(args.task),
        url: args.url,
        transfer: TransferKind::Download,
        start_time: task_start,
        end_time: task_end,
        size_in_bytes: 1_048_576,
        number_of_files: 3,
        operation_type: "fetch".to_string(),
        download_type: "full".to_string(),
    };

    // (B) group の window
    let group = GroupMetrics {
        retry_id,
        start_time: group_start,
        end_time: Utc::now(),
        type_of_metrics: "retry-window".to_string(),
    };

    // (C) 閉じた payload 集合をまとめて送る
    let payloads = [MetricPayload::from(io), MetricPayload::from(group)];
    for payload in &payloads {
        emitter.emit(payload).await?;
    }

    tracing::info!(count = payloads.len(), "metrics emitted");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let config = MetricsConfig::from_env();
    if let Err(e) = init_tracing(&config) {
        eprintln!("tally-cli: {e}");
        return ExitCode::from(e.exit_class());
    }

    // fatal（encode 失敗）は supervisor が終了コード 30 にする
    supervisor::report(run(&config, args).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments_default() {
        let args = Args::try_parse_from(["tally-cli"]).unwrap();
        assert_eq!(args.group, "g1");
        assert_eq!(args.task, "t1");
        assert_eq!(args.url, "s3://bucket/key");
    }

    #[test]
    fn positional_arguments_override_defaults() {
        let args = Args::try_parse_from(["tally-cli", "ingest", "fetch-a", "s3://b/k"]).unwrap();
        assert_eq!(args.group, "ingest");
        assert_eq!(args.task, "fetch-a");
        assert_eq!(args.url, "s3://b/k");
    }

    #[test]
    fn extra_or_unknown_arguments_are_rejected() {
        assert!(Args::try_parse_from(["tally-cli", "g", "t", "u", "extra"]).is_err());
        assert!(Args::try_parse_from(["tally-cli", "--verbose"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
