//! Shared test utilities used across fixtura crates.

pub mod ci;

pub mod tracing {
    //! A layer that records emitted events so tests can assert on diagnostics.

    use std::{
        collections::BTreeMap,
        fmt,
        sync::{Arc, Mutex, PoisonError},
    };

    use tracing::{
        Event, Level, Subscriber,
        field::{Field, Visit},
    };
    use tracing_subscriber::{Layer, layer::Context, prelude::*, registry::Registry};

    /// Snapshot of one emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Level the event was emitted at.
        pub level: Level,
        /// Target from the event metadata, usually the module path.
        pub target: String,
        /// The formatted `message` field, when present.
        pub message: Option<String>,
        /// Remaining structured fields, keyed by name.
        pub fields: BTreeMap<String, String>,
    }

    impl EventRecord {
        /// Returns the named field's rendered value.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    /// Recording layer installed during tests.
    ///
    /// Clones share one buffer, so a test keeps a handle while the subscriber
    /// owns another.
    ///
    /// # Examples
    /// ```
    /// use fixtura_test_support::tracing::EventRecorder;
    ///
    /// let recorder = EventRecorder::default();
    /// recorder.capture(|| tracing::warn!(attempts = 3, "gave up"));
    /// let events = recorder.events();
    /// assert_eq!(events.len(), 1);
    /// assert_eq!(events[0].field("attempts"), Some("3"));
    /// ```
    #[derive(Clone, Debug, Default)]
    pub struct EventRecorder {
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl EventRecorder {
        /// Runs `body` with this recorder installed as the thread's default
        /// subscriber and returns its result.
        pub fn capture<T>(&self, body: impl FnOnce() -> T) -> T {
            let subscriber = Registry::default().with(self.clone());
            tracing::subscriber::with_default(subscriber, body)
        }

        /// Returns the recorded events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.buffer().clone()
        }

        /// Returns the recorded events at `level`.
        #[must_use]
        pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
            self.buffer()
                .iter()
                .filter(|event| event.level == level)
                .cloned()
                .collect()
        }

        fn buffer(&self) -> std::sync::MutexGuard<'_, Vec<EventRecord>> {
            self.events.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl<S: Subscriber> Layer<S> for EventRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldCollector::default();
            event.record(&mut visitor);
            let metadata = event.metadata();
            self.buffer().push(EventRecord {
                level: *metadata.level(),
                target: metadata.target().to_owned(),
                message: visitor.message,
                fields: visitor.fields,
            });
        }
    }

    #[derive(Default)]
    struct FieldCollector {
        message: Option<String>,
        fields: BTreeMap<String, String>,
    }

    impl FieldCollector {
        fn store(&mut self, field: &Field, value: String) {
            if field.name() == "message" {
                self.message = Some(value);
            } else {
                self.fields.insert(field.name().to_owned(), value);
            }
        }
    }

    impl Visit for FieldCollector {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.store(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.store(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.store(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.store(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.store(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.store(field, value.to_string());
        }
    }

}
