use chrono::Utc;

use goldline_auth::{AuthGate, CredentialVerifier, FixedCredential, LoginError, Profile, Session};
use goldline_catalog::{CatalogItem, CatalogRepository};
use goldline_core::DomainResult;
use goldline_events::{Event, EventBus, InMemoryEventBus, Subscription};
use goldline_sales::{OrderHistory, SalesAggregator, seed};

use crate::config::ConsoleConfig;
use crate::dashboard::{Dashboard, ProfileView};
use crate::events::ConsoleEvent;

/// Owned state behind every screen.
///
/// One instance per running console, injected into the shell. Mutations go
/// through `&mut self` only; after each successful one a [`ConsoleEvent`] is
/// published so the shell knows to re-read.
#[derive(Debug)]
pub struct Console<V> {
    catalog: CatalogRepository,
    sales: SalesAggregator,
    orders: OrderHistory,
    gate: AuthGate<V>,
    bus: InMemoryEventBus<ConsoleEvent>,
}

impl Console<FixedCredential> {
    /// A console with the reference catalog and demo sales, admitting the
    /// configured account.
    pub fn from_config(config: &ConsoleConfig) -> DomainResult<Self> {
        let catalog = CatalogRepository::with_items(goldline_catalog::seed::catalog())?;
        let sales = SalesAggregator::with_buckets(seed::transactions(), config.buckets);
        let orders = OrderHistory::new(seed::orders());
        tracing::info!(
            items = catalog.len(),
            transactions = sales.transactions().len(),
            orders = orders.orders().len(),
            "console seeded"
        );
        Ok(Self::new(catalog, sales, orders, config.credential()))
    }
}

impl<V: CredentialVerifier> Console<V> {
    pub fn new(
        catalog: CatalogRepository,
        sales: SalesAggregator,
        orders: OrderHistory,
        verifier: V,
    ) -> Self {
        Self {
            catalog,
            sales,
            orders,
            gate: AuthGate::new(verifier),
            bus: InMemoryEventBus::new(),
        }
    }

    /// Change notifications from now on.
    pub fn subscribe(&self) -> Subscription<ConsoleEvent> {
        self.bus.subscribe()
    }

    // ── catalog ────────────────────────────────────────────────────────────

    pub fn list_items(&self) -> &[CatalogItem] {
        self.catalog.list()
    }

    pub fn add_item(&mut self, item: CatalogItem) -> DomainResult<()> {
        let id = item.id.clone();
        self.catalog.add(item)?;
        self.notify(ConsoleEvent::CatalogItemAdded {
            id,
            occurred_at: Utc::now(),
        });
        Ok(())
    }

    pub fn remove_item(&mut self, id: &str) -> DomainResult<CatalogItem> {
        let removed = self.catalog.remove_by_id(id)?;
        self.notify(ConsoleEvent::CatalogItemRemoved {
            id: removed.id.clone(),
            occurred_at: Utc::now(),
        });
        Ok(removed)
    }

    // ── analytics ──────────────────────────────────────────────────────────

    pub fn analytics(&self) -> &SalesAggregator {
        &self.sales
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::from_sales(&self.sales)
    }

    // ── session ────────────────────────────────────────────────────────────

    pub fn current_session(&self) -> &Session {
        self.gate.current_session()
    }

    pub fn attempt_login(&mut self, login: &str, password: &str) -> Result<Profile, LoginError> {
        let profile = self.gate.attempt_login(login, password)?;
        if let Session::Authenticated(s) = self.gate.current_session() {
            self.notify(ConsoleEvent::SessionStarted {
                session_id: s.id,
                username: profile.username.clone(),
                occurred_at: s.started_at,
            });
        }
        Ok(profile)
    }

    /// Idempotent; only an actual sign-out is announced.
    pub fn logout(&mut self) {
        if let Some(profile) = self.gate.logout() {
            self.notify(ConsoleEvent::SessionEnded {
                username: profile.username,
                occurred_at: Utc::now(),
            });
        }
    }

    /// The user-scoped screen, hidden from anonymous sessions.
    pub fn profile_view(&self) -> Option<ProfileView> {
        self.gate
            .profile()
            .map(|profile| ProfileView::for_profile(profile, &self.orders))
    }

    fn notify(&self, event: ConsoleEvent) {
        let kind = event.event_type();
        // State is already committed; a broken bus only costs a re-render.
        if let Err(err) = self.bus.publish(event) {
            tracing::warn!(event = kind, error = ?err, "change notification dropped");
        }
    }
}
