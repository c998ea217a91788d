//! Tests for tokio spawner utilities

use std::time::Duration;

use bounded_task_scheduler::core::{Scheduler, Spawn, TaskSpec};
use bounded_task_scheduler::runtime::tokio_spawner::TokioSpawner;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_spawner_spawn() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());

    let handle = spawner.spawn(async move { 123 });

    let result = handle.await.expect("join result");
    assert_eq!(result, 123);
}

#[test]
fn test_current_spawner_requires_runtime() {
    assert!(TokioSpawner::current().is_err());
}

#[test]
fn test_owned_runtime_drives_scheduler_from_sync_code() {
    let spawner = TokioSpawner::multi_thread(2).expect("runtime builds");
    let scheduler = Scheduler::with_spawner(2, Duration::from_secs(1), spawner.clone()).unwrap();

    let specs: Vec<TaskSpec<u32, u32>> = (0..4)
        .map(|i| {
            TaskSpec::new(
                format!("t{i}"),
                |v: u32| async move {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    anyhow::Ok(v + 1)
                },
                i,
            )
        })
        .collect();

    // Units run on the owned runtime; the gather itself needs no reactor.
    let results = futures::executor::block_on(scheduler.schedule_tasks(specs));
    let values: Vec<u32> = results.iter().filter_map(|r| r.value().copied()).collect();
    assert_eq!(values, vec![1, 2, 3, 4]);

    drop(scheduler);
    drop(spawner);
}

#[test]
fn test_default_worker_threads_positive() {
    assert!(TokioSpawner::default_worker_threads() >= 1);
}
