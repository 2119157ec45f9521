use anyhow::Result;
use spangate_core::config::ExporterConfig;
use spangate_core::model::span::{SPAN_KIND_CLIENT, SpanStatus};
use spangate_export::Exporter;
use spangate_testkit::{CapturingSender, init_test_logging, sample_record, span_id};

fn config() -> ExporterConfig {
    ExporterConfig {
        source: "api-1".to_string(),
        app_tags: vec![("env".to_string(), "prod".to_string())],
        max_in_flight: 4,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn exports_a_root_span_end_to_end() -> Result<()> {
    init_test_logging();
    let sender = CapturingSender::new();
    let exporter = Exporter::new(&config(), sender.clone());

    exporter.export_span(&sample_record("GET /v1/orders"));
    exporter.flush().await;

    let spans = sender.spans();
    assert_eq!(spans.len(), 1);
    let span = &spans[0];
    assert_eq!(span.name, "GET /v1/orders");
    assert_eq!(span.source, "api-1");
    assert_eq!(span.duration_millis, 1_800);
    assert_eq!(span.trace_id.len(), 36);
    assert!(span.parents.is_empty());
    assert_eq!(
        span.tags,
        vec![
            ("user".to_string(), "abc".to_string()),
            ("env".to_string(), "prod".to_string()),
        ]
    );
    assert_eq!(exporter.spans_dropped(), 0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn exports_a_failed_child_span_with_error_tags() -> Result<()> {
    let sender = CapturingSender::new();
    let exporter = Exporter::new(&config(), sender.clone());

    let mut record = sample_record("cache.get");
    record.parent_span_id = span_id(9);
    record.kind = SPAN_KIND_CLIENT;
    record.status = SpanStatus {
        code: 5,
        message: "missing".to_string(),
    };
    exporter.export_span(&record);
    exporter.flush().await;

    let spans = sender.spans();
    assert_eq!(spans.len(), 1);
    let span = &spans[0];
    assert_eq!(span.parents, vec![span_id(9).to_uuid_string()]);
    assert!(
        span.tags
            .contains(&("span.kind".to_string(), "client".to_string()))
    );
    assert!(span.tags.contains(&("error".to_string(), "true".to_string())));
    assert!(
        span.tags
            .contains(&("error_code".to_string(), "NotFound".to_string()))
    );
    assert_eq!(span.logs[0].fields.get("message").unwrap(), "missing");
    assert_eq!(span.logs[0].fields.get("event").unwrap(), "error");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn export_never_surfaces_rejection() -> Result<()> {
    let sender = CapturingSender::new();
    let cfg = ExporterConfig {
        max_in_flight: 1,
        ..config()
    };
    let exporter = Exporter::new(&cfg, sender.clone());

    for _ in 0..50 {
        exporter.export_span(&sample_record("burst"));
    }
    exporter.flush().await;

    let delivered = sender.spans().len() as u64;
    assert_eq!(delivered + exporter.spans_dropped(), 50);
    assert!(delivered >= 1);
    Ok(())
}
