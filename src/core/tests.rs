#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use futures::executor::block_on;

    use crate::core::content::{ACADEMY_SLIDES, LAB_TOPICS, OFFER_TOPICS, TEAM_PHOTOS};
    use crate::core::session::DASHBOARD_ROUTE;
    use crate::core::{
        Accordion, ActiveMark, AuthError, CounterSet, GateAction, IndexRotator, Session,
        SessionChange, SessionChannel, SessionEvent, SessionGate, SessionProvider, Subscription,
        TickOutcome, User, UserMetadata, ViewState, lookup_or_anonymous, mark_active,
    };

    /// Provider double: a canned lookup result plus a channel tests can push
    /// change events through.
    struct ScriptedProvider {
        lookup: Result<Option<Session>, AuthError>,
        changes: SessionChannel<SessionChange>,
    }

    impl ScriptedProvider {
        fn new(lookup: Result<Option<Session>, AuthError>) -> Self {
            Self {
                lookup,
                changes: SessionChannel::new(),
            }
        }

        fn push(&self, event: SessionEvent, session: Option<Session>) {
            self.changes.emit(&SessionChange::new(event, session));
        }
    }

    impl SessionProvider for ScriptedProvider {
        async fn current_session(&self) -> Result<Option<Session>, AuthError> {
            self.lookup.clone()
        }

        fn subscribe(&self, listener: impl Fn(&SessionChange) + 'static) -> Subscription {
            self.changes.subscribe(listener)
        }
    }

    fn session(email: &str, token: &str) -> Session {
        Session {
            access_token: token.to_string(),
            refresh_token: format!("{token}-refresh"),
            expires_at: None,
            expires_in: None,
            user: User {
                id: "b9e1d0c4".to_string(),
                email: Some(email.to_string()),
                user_metadata: UserMetadata {
                    full_name: Some("Kasuni Karunarathne".to_string()),
                },
            },
        }
    }

    /// Wire a gate to a provider the same way the landing page does:
    /// initial lookup first, then every change event.
    fn mount_gate(
        provider: &ScriptedProvider,
    ) -> (Rc<RefCell<SessionGate>>, Rc<RefCell<Vec<GateAction>>>, Subscription) {
        let gate = Rc::new(RefCell::new(SessionGate::new()));
        let actions = Rc::new(RefCell::new(Vec::new()));

        let initial = block_on(lookup_or_anonymous(provider));
        if let Some(action) = gate.borrow_mut().apply(initial) {
            actions.borrow_mut().push(action);
        }

        let subscription = {
            let gate = gate.clone();
            let actions = actions.clone();
            provider.subscribe(move |change| {
                if let Some(action) = gate.borrow_mut().apply(change.session.clone()) {
                    actions.borrow_mut().push(action);
                }
            })
        };

        (gate, actions, subscription)
    }

    // ========================================================================
    // Session gate scenarios
    // ========================================================================

    #[test]
    fn test_no_session_and_no_events_shows_marketing() {
        let provider = ScriptedProvider::new(Ok(None));
        let (gate, actions, _subscription) = mount_gate(&provider);

        assert_eq!(gate.borrow().view(), &ViewState::Anonymous);
        assert!(actions.borrow().is_empty());
    }

    #[test]
    fn test_existing_session_navigates_on_mount() {
        let provider = ScriptedProvider::new(Ok(Some(session("a@insilico.lk", "t1"))));
        let (gate, actions, _subscription) = mount_gate(&provider);

        assert!(gate.borrow().view().is_authenticated());
        assert_eq!(*actions.borrow(), vec![GateAction::Navigate(DASHBOARD_ROUTE)]);
    }

    #[test]
    fn test_sign_in_navigates_once_and_refresh_does_not() {
        let provider = ScriptedProvider::new(Ok(None));
        let (gate, actions, _subscription) = mount_gate(&provider);

        provider.push(SessionEvent::SignedIn, Some(session("a@insilico.lk", "t1")));
        provider.push(SessionEvent::TokenRefreshed, Some(session("a@insilico.lk", "t2")));

        assert_eq!(actions.borrow().len(), 1);
        assert_eq!(
            gate.borrow().view().session().map(|s| s.access_token.as_str()),
            Some("t2")
        );
    }

    #[test]
    fn test_sign_out_returns_to_marketing_without_navigation() {
        let provider = ScriptedProvider::new(Ok(Some(session("a@insilico.lk", "t1"))));
        let (gate, actions, _subscription) = mount_gate(&provider);

        provider.push(SessionEvent::SignedOut, None);

        assert_eq!(gate.borrow().view(), &ViewState::Anonymous);
        assert_eq!(actions.borrow().len(), 1);
    }

    #[test]
    fn test_failed_lookup_degrades_to_anonymous() {
        let provider = ScriptedProvider::new(Err(AuthError::Network("offline".to_string())));
        let (gate, actions, _subscription) = mount_gate(&provider);

        assert!(!gate.borrow().view().is_authenticated());
        assert!(actions.borrow().is_empty());

        // Later events still reach the gate
        provider.push(SessionEvent::SignedIn, Some(session("b@insilico.lk", "t1")));
        assert_eq!(actions.borrow().len(), 1);
    }

    #[test]
    fn test_unmounted_gate_ignores_later_events() {
        let provider = ScriptedProvider::new(Ok(None));
        let (gate, actions, subscription) = mount_gate(&provider);

        drop(subscription);
        provider.push(SessionEvent::SignedIn, Some(session("a@insilico.lk", "t1")));

        assert!(!gate.borrow().view().is_authenticated());
        assert!(actions.borrow().is_empty());
        assert_eq!(provider.changes.listener_count(), 0);
    }

    // ========================================================================
    // Slideshows over the real slide lists
    // ========================================================================

    #[derive(Debug, Default)]
    struct FakeSlide {
        active: bool,
        toggles: Cell<u32>,
    }

    impl ActiveMark for FakeSlide {
        fn set_active(&mut self, active: bool) {
            self.toggles.set(self.toggles.get() + 1);
            self.active = active;
        }
    }

    #[test]
    fn test_academy_rotator_marks_exactly_one_slide() {
        let mut slides: Vec<FakeSlide> = ACADEMY_SLIDES.iter().map(|_| FakeSlide::default()).collect();
        let mut rotator = IndexRotator::new(slides.len()).unwrap();

        for _ in 0..(ACADEMY_SLIDES.len() * 3 + 1) {
            rotator.advance();
            mark_active(&mut slides, rotator.index());

            let active: Vec<usize> = slides
                .iter()
                .enumerate()
                .filter(|(_, s)| s.active)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(active, vec![rotator.index()]);
        }
    }

    #[test]
    fn test_team_carousel_switches_lists_on_resize() {
        let mut rotator = IndexRotator::new(TEAM_PHOTOS.select(true).len()).unwrap();
        rotator.jump(8);

        rotator.resize(TEAM_PHOTOS.select(false).len()).unwrap();

        assert_eq!(rotator.len(), 5);
        assert!(rotator.index() < 5);
    }

    #[test]
    fn test_lab_carousel_wraps_both_ways() {
        let mut rotator = IndexRotator::new(LAB_TOPICS.len()).unwrap();

        rotator.previous();
        assert_eq!(LAB_TOPICS[rotator.index()].id, "cmpaat-database");
        rotator.next();
        assert_eq!(LAB_TOPICS[rotator.index()].id, "ai-agents");
    }

    // ========================================================================
    // Counters and accordion
    // ========================================================================

    #[test]
    fn test_counters_settle_on_site_targets() {
        let mut counters = CounterSet::site_defaults();
        let mut ticks = 0;

        while counters.tick() == TickOutcome::Advanced {
            ticks += 1;
        }

        assert_eq!(ticks, 10);
        let shown: Vec<String> = counters.labels().map(|l| counters.display(l)).collect();
        assert_eq!(shown, vec!["06", "10", "05", "05"]);
    }

    #[test]
    fn test_offer_accordion_keeps_one_panel_open() {
        let mut accordion = Accordion::new(OFFER_TOPICS.len()).unwrap();

        accordion.toggle(0);
        accordion.toggle(3);
        accordion.toggle(3);

        assert_eq!(accordion.open_panel(), None);
    }
}
