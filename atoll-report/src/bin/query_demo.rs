//! Store the same sensor data in several containers, apply one compound
//! query across all of them, and print the resulting view.

use std::sync::Arc;

use atoll_container::{Container, Snapshot};
use atoll_query::{CombineOp, CompareOp, Predicate, QueryEvaluator, TargetKind};
use atoll_report::view_report_lines;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    setup_tracing();

    let mut containers: Vec<Arc<Container>> = Vec::new();
    for i in 1..=5 {
        let name = format!("demo_view_{}.h5", i);
        println!("Creating container \"{}\"", name);
        let container = Container::create(name);

        let mut tx = container.begin_transaction(2)?;
        tx.create_dataset("/pressure", (20..30).collect::<Vec<i32>>(), vec![10], None)?;
        tx.create_dataset(
            "/temperature",
            (200..300).map(|i| i as f64 / 10.0).collect::<Vec<f64>>(),
            vec![100],
            None,
        )?;
        tx.create_attribute("/pressure", "SensorID", "1234-567-89");
        tx.commit()?;
        containers.push(container);
    }

    println!("Query is: ((21.7 < data_elem < 26.9) AND (data_elem != 23)) OR (data_elem == 29)");
    let p1 = Predicate::compare(TargetKind::DataElement, CompareOp::Gt, 21.7)?;
    let p2 = Predicate::compare(TargetKind::DataElement, CompareOp::Lt, 26.9)?;
    let p3 = Predicate::compare(TargetKind::DataElement, CompareOp::Ne, 23i32)?;
    let p4 = Predicate::compare(TargetKind::DataElement, CompareOp::Eq, 29i32)?;
    let band = Predicate::combine(CombineOp::And, p1, p2);
    let band = Predicate::combine(CombineOp::And, band, p3);
    let query = Predicate::combine(CombineOp::Or, band, p4);

    let snapshots: Vec<Snapshot> = containers
        .iter()
        .map(|c| c.acquire_snapshot(2))
        .collect::<Result<_, _>>()?;

    println!("Applying query");
    let view = QueryEvaluator::apply_multi(&query, &snapshots)?;
    for line in view_report_lines(&view, &snapshots) {
        println!("{}", line);
    }

    for snapshot in snapshots {
        let container = snapshot.container().clone();
        container.release_snapshot(snapshot);
    }
    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| atoll_config::CONFIG.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
