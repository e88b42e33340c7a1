//! Tests for the single-shot task primitive

mod task_tests {
    use async_either::{AsyncTask, FutureExt, TaskError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_task_from_value() {
        let task = AsyncTask::from_value(42);
        assert_eq!(task.await, Ok(42));
    }

    #[tokio::test]
    async fn test_task_faulted() {
        let task: AsyncTask<i32> = AsyncTask::faulted(TaskError::new("no value"));
        assert_eq!(task.await, Err(TaskError::new("no value")));
    }

    #[tokio::test]
    async fn test_task_from_future() {
        let task = AsyncTask::from_future(async { 7 });
        assert_eq!(task.await, Ok(7));
    }

    #[tokio::test]
    async fn test_task_try_from_future() {
        let resolved = AsyncTask::try_from_future(async { Ok(7) });
        assert_eq!(resolved.await, Ok(7));

        let faulted: AsyncTask<i32> =
            AsyncTask::try_from_future(async { Err(TaskError::new("gone")) });
        assert_eq!(faulted.await, Err(TaskError::new("gone")));
    }

    #[tokio::test]
    async fn test_task_spawn_blocking() {
        let task = AsyncTask::spawn(|| 21 * 2);
        assert_eq!(task.await, Ok(42));
    }

    #[tokio::test]
    async fn test_task_map() {
        let task = AsyncTask::from_value(2).map(|n| n * 10);
        assert_eq!(task.await, Ok(20));
    }

    #[tokio::test]
    async fn test_task_map_passes_faults_through() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let task: AsyncTask<i32> = AsyncTask::faulted(TaskError::new("boom"));
        let mapped = task.map(move |n| {
            seen.fetch_add(1, Ordering::SeqCst);
            n
        });

        assert_eq!(mapped.await, Err(TaskError::new("boom")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_task_map_try_ok() {
        let task = AsyncTask::from_value(2).map_try(|n| Ok::<_, TaskError>(n.to_string()));
        assert_eq!(task.await, Ok("2".to_string()));
    }

    #[tokio::test]
    async fn test_task_map_try_err_becomes_fault() {
        let task = AsyncTask::from_value(2).map_try(|_| Err::<i32, _>("bad input"));
        assert_eq!(task.await, Err(TaskError::new("bad input")));
    }

    #[tokio::test]
    async fn test_task_flat_map() {
        let task = AsyncTask::from_value(2).flat_map(|n| AsyncTask::from_value(n + 3));
        assert_eq!(task.await, Ok(5));
    }

    #[tokio::test]
    async fn test_task_flat_map_short_circuits_on_fault() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let task: AsyncTask<i32> = AsyncTask::faulted(TaskError::new("boom"));
        let chained = task.flat_map(move |n| {
            seen.fetch_add(1, Ordering::SeqCst);
            AsyncTask::from_value(n)
        });

        assert_eq!(chained.await, Err(TaskError::new("boom")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_task_recover() {
        let task: AsyncTask<i32> = AsyncTask::faulted(TaskError::new("gone"));
        assert_eq!(task.recover(|_| -1).await, Ok(-1));
    }

    #[tokio::test]
    async fn test_task_recover_leaves_resolved_values_alone() {
        let task = AsyncTask::from_value(3).recover(|_| -1);
        assert_eq!(task.await, Ok(3));
    }

    #[tokio::test]
    async fn test_task_recover_sees_the_fault() {
        let task: AsyncTask<String> = AsyncTask::faulted(TaskError::new("disk gone"));
        let healed = task.recover(|error| error.message().to_string());
        assert_eq!(healed.await, Ok("disk gone".to_string()));
    }

    #[tokio::test]
    async fn test_task_dropped_producer_reads_as_fault() {
        let task: AsyncTask<i32> = AsyncTask::from_future(async { panic!("producer died") });
        assert!(task.await.is_err());
    }

    #[tokio::test]
    async fn test_task_observers() {
        let log = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let on_ok = Arc::clone(&log);
        let task = AsyncTask::from_value(5).on_success(move |n| on_ok.lock().push(*n));
        assert_eq!(task.await, Ok(5));
        assert_eq!(*log.lock(), vec![5]);

        let on_err = Arc::clone(&log);
        let task: AsyncTask<i32> = AsyncTask::faulted(TaskError::new("nope"));
        let observed = task.on_failure(move |_| on_err.lock().push(-1));
        assert!(observed.await.is_err());
        assert_eq!(*log.lock(), vec![5, -1]);
    }

    #[tokio::test]
    async fn test_task_combinators_register_without_awaiting() {
        // A never-resolving input must not stop the combinator itself from
        // returning.
        let task: AsyncTask<i32> = AsyncTask::from_future(futures::future::pending());
        let _mapped = task.map(|n| n + 1);
    }

    #[test]
    fn test_task_error_display_and_conversions() {
        let error = TaskError::new("it broke");
        assert_eq!(error.to_string(), "it broke");
        assert_eq!(error.message(), "it broke");

        assert_eq!(TaskError::from("boom"), TaskError::new("boom"));
        assert_eq!(TaskError::from("boom".to_string()), TaskError::new("boom"));

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        assert_eq!(TaskError::from_error(io), TaskError::new("disk gone"));
    }
}
