use crate::modules::reviews::adapters::inbound::session::SessionSettings;
use crate::modules::reviews::adapters::outbound::book_store_in_memory::InMemoryBookStore;
use crate::modules::reviews::use_cases::assign_slot::handler::AssignSlotHandler;
use crate::modules::reviews::use_cases::export_books::handler::ExportBooksHandler;
use crate::modules::reviews::use_cases::manage_books::handler::BookLedger;
use crate::modules::reviews::use_cases::notify_reviewer::handler::NotifyReviewerHandler;
use crate::modules::reviews::use_cases::preferences::handler::Preferences;
use crate::shared::infrastructure::notification_channel::NotificationChannel;
use crate::shared::infrastructure::object_store::in_memory::InMemoryObjectStore;
use crate::shared::infrastructure::preference_store::in_memory::InMemoryPreferenceStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionSettings>,
    pub assign_handler: Arc<AssignSlotHandler<InMemoryBookStore>>,
    pub ledger: Arc<BookLedger<InMemoryBookStore, InMemoryObjectStore>>,
    pub notifier: Arc<
        NotifyReviewerHandler<InMemoryBookStore, dyn NotificationChannel, InMemoryPreferenceStore>,
    >,
    pub exporter: Arc<ExportBooksHandler<InMemoryBookStore>>,
    pub preferences: Arc<Preferences<InMemoryPreferenceStore>>,
}

impl AppState {
    /// Wires every handler over shared in-memory stores.
    pub fn in_memory(
        session: SessionSettings,
        capacity: usize,
        channel: Arc<dyn NotificationChannel>,
    ) -> Self {
        Self::with_stores(
            session,
            capacity,
            channel,
            Arc::new(InMemoryBookStore::new()),
            Arc::new(InMemoryObjectStore::new()),
            Arc::new(InMemoryPreferenceStore::new()),
        )
    }

    pub fn with_stores(
        session: SessionSettings,
        capacity: usize,
        channel: Arc<dyn NotificationChannel>,
        books: Arc<InMemoryBookStore>,
        objects: Arc<InMemoryObjectStore>,
        prefs: Arc<InMemoryPreferenceStore>,
    ) -> Self {
        let preferences = Arc::new(Preferences::new(prefs));
        Self {
            session: Arc::new(session),
            assign_handler: Arc::new(AssignSlotHandler::new(books.clone(), capacity)),
            ledger: Arc::new(BookLedger::new(books.clone(), objects)),
            notifier: Arc::new(NotifyReviewerHandler::new(
                books.clone(),
                channel,
                preferences.clone(),
            )),
            exporter: Arc::new(ExportBooksHandler::new(books)),
            preferences,
        }
    }
}
