//! Server sync use case
//!
//! A pass pulls candidate quotes from the server, merges the unseen ones into
//! the local book, then optionally posts every local quote back. Network
//! failures are logged and swallowed; the pass still completes and local
//! state is left as it was.

use crate::application::QuoteStore;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, QuoteSource, SyncState};
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Summary of one sync pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of candidates received, `None` when the fetch failed
    pub fetched: Option<usize>,
    pub added: usize,
    pub pushed: usize,
    pub push_failures: usize,
}

impl SyncReport {
    pub fn changed(&self) -> bool {
        self.added > 0
    }
}

/// How the periodic loop runs
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub interval: Duration,
    /// Stop after this many passes; run until killed when `None`
    pub ticks: Option<u64>,
    pub push: bool,
}

/// Service for syncing the quote book with a server
pub struct SyncService<S: QuoteSource> {
    repository: FileSystemRepository,
    source: S,
}

impl<S: QuoteSource> SyncService<S> {
    pub fn new(repository: FileSystemRepository, source: S) -> Self {
        SyncService { repository, source }
    }

    /// Run a single sync pass.
    ///
    /// Only local persistence failures are returned as errors.
    pub fn run_once(&self, push: bool) -> Result<SyncReport> {
        let mut store = QuoteStore::load(self.repository.clone())?;
        let mut report = SyncReport::default();

        match self.source.fetch() {
            Ok(candidates) => {
                report.fetched = Some(candidates.len());
                report.added = store.merge(candidates)?.added;
            }
            Err(e) => warn!(error = %e, "failed to fetch quotes from server"),
        }

        if push {
            for quote in store.quotes() {
                match self.source.publish(quote) {
                    Ok(()) => report.pushed += 1,
                    Err(e) => {
                        debug!(error = %e, text = %quote.text, "failed to post quote");
                        report.push_failures += 1;
                    }
                }
            }
            if report.push_failures > 0 {
                warn!(
                    failed = report.push_failures,
                    total = store.len(),
                    "some quotes could not be posted to the server"
                );
            }
        }

        self.repository.save_sync_state(&SyncState {
            last_sync: Some(Utc::now()),
            last_added: report.added,
            last_fetch_ok: report.fetched.is_some(),
        })?;

        info!(
            fetched = ?report.fetched,
            added = report.added,
            pushed = report.pushed,
            "sync pass complete"
        );
        Ok(report)
    }

    /// Run sync passes back to back, sleeping `interval` between them.
    ///
    /// Passes are sequential and never overlap. A failing pass is logged and
    /// the loop carries on.
    pub fn watch<F>(&self, options: &WatchOptions, mut on_pass: F)
    where
        F: FnMut(&SyncReport),
    {
        let mut completed: u64 = 0;

        while options.ticks.is_none_or(|limit| completed < limit) {
            if completed > 0 {
                std::thread::sleep(options.interval);
            }

            match self.run_once(options.push) {
                Ok(report) => on_pass(&report),
                Err(e) => warn!(error = %e, "sync pass failed"),
            }
            completed += 1;
        }
    }

    /// Last recorded sync state
    pub fn status(&self) -> Result<SyncState> {
        self.repository.load_sync_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::domain::Quote;
    use crate::error::QuoteError;
    use crate::infrastructure::QuoteRepository;
    use std::cell::RefCell;
    use tempfile::TempDir;

    #[derive(Default)]
    struct FakeSource {
        items: Vec<Quote>,
        fail_fetch: bool,
        fail_publish: bool,
        published: RefCell<Vec<Quote>>,
    }

    impl QuoteSource for FakeSource {
        fn fetch(&self) -> Result<Vec<Quote>> {
            if self.fail_fetch {
                return Err(QuoteError::Config("server unreachable".to_string()));
            }
            Ok(self.items.clone())
        }

        fn publish(&self, quote: &Quote) -> Result<()> {
            if self.fail_publish {
                return Err(QuoteError::Config("post rejected".to_string()));
            }
            self.published.borrow_mut().push(quote.clone());
            Ok(())
        }
    }

    fn setup(quotes: &[Quote]) -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        init(temp.path(), true).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.save_quotes(quotes).unwrap();
        (temp, repo)
    }

    #[test]
    fn test_sync_adds_unseen_quotes() {
        let (_temp, repo) = setup(&[Quote::new("A", "X")]);
        let source = FakeSource {
            items: vec![Quote::new("A", "Y"), Quote::new("B", "Z")],
            ..Default::default()
        };
        let service = SyncService::new(repo.clone(), source);

        let report = service.run_once(false).unwrap();

        assert_eq!(report.fetched, Some(2));
        assert_eq!(report.added, 1);
        assert!(report.changed());
        assert_eq!(
            repo.load_quotes().unwrap(),
            vec![Quote::new("A", "X"), Quote::new("B", "Z")]
        );
    }

    #[test]
    fn test_sync_twice_adds_nothing_second_time() {
        let (_temp, repo) = setup(&[]);
        let source = FakeSource {
            items: vec![Quote::new("A", "Server")],
            ..Default::default()
        };
        let service = SyncService::new(repo.clone(), source);

        assert_eq!(service.run_once(false).unwrap().added, 1);
        assert_eq!(service.run_once(false).unwrap().added, 0);
        assert_eq!(repo.load_quotes().unwrap().len(), 1);
    }

    #[test]
    fn test_fetch_failure_is_swallowed() {
        let (_temp, repo) = setup(&[Quote::new("A", "X")]);
        let source = FakeSource {
            fail_fetch: true,
            ..Default::default()
        };
        let service = SyncService::new(repo.clone(), source);

        let report = service.run_once(false).unwrap();

        assert_eq!(report.fetched, None);
        assert!(!report.changed());
        assert_eq!(repo.load_quotes().unwrap(), vec![Quote::new("A", "X")]);
        assert!(!service.status().unwrap().last_fetch_ok);
    }

    #[test]
    fn test_push_posts_every_local_quote_in_order() {
        let (_temp, repo) = setup(&[Quote::new("A", "X")]);
        let source = FakeSource {
            items: vec![Quote::new("B", "Server")],
            ..Default::default()
        };
        let service = SyncService::new(repo, source);

        let report = service.run_once(true).unwrap();

        assert_eq!(report.pushed, 2);
        assert_eq!(
            *service.source.published.borrow(),
            vec![Quote::new("A", "X"), Quote::new("B", "Server")]
        );
    }

    #[test]
    fn test_push_failures_are_counted_not_raised() {
        let (_temp, repo) = setup(&[Quote::new("A", "X"), Quote::new("B", "Y")]);
        let source = FakeSource {
            fail_publish: true,
            ..Default::default()
        };
        let service = SyncService::new(repo, source);

        let report = service.run_once(true).unwrap();
        assert_eq!(report.pushed, 0);
        assert_eq!(report.push_failures, 2);
    }

    #[test]
    fn test_sync_records_state() {
        let (_temp, repo) = setup(&[]);
        let source = FakeSource {
            items: vec![Quote::new("A", "Server"), Quote::new("B", "Server")],
            ..Default::default()
        };
        let service = SyncService::new(repo, source);

        assert!(service.status().unwrap().last_sync.is_none());
        service.run_once(false).unwrap();

        let state = service.status().unwrap();
        assert!(state.last_sync.is_some());
        assert_eq!(state.last_added, 2);
        assert!(state.last_fetch_ok);
    }

    #[test]
    fn test_watch_runs_bounded_ticks() {
        let (_temp, repo) = setup(&[]);
        let source = FakeSource {
            items: vec![Quote::new("A", "Server")],
            ..Default::default()
        };
        let service = SyncService::new(repo, source);
        let options = WatchOptions {
            interval: Duration::from_millis(1),
            ticks: Some(3),
            push: false,
        };

        let mut reports = Vec::new();
        service.watch(&options, |report| reports.push(report.clone()));

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].added, 1);
        assert!(reports[1..].iter().all(|r| r.added == 0));
    }

    #[test]
    fn test_watch_with_zero_ticks_runs_no_pass() {
        let (_temp, repo) = setup(&[]);
        let source = FakeSource {
            items: vec![Quote::new("A", "Server")],
            ..Default::default()
        };
        let service = SyncService::new(repo.clone(), source);
        let options = WatchOptions {
            interval: Duration::from_millis(1),
            ticks: Some(0),
            push: false,
        };

        let mut passes = 0;
        service.watch(&options, |_| passes += 1);

        assert_eq!(passes, 0);
        assert!(repo.load_quotes().unwrap().is_empty());
        assert!(service.status().unwrap().last_sync.is_none());
    }
}
