//! 后台任务结果的交付

use image_search_core::SessionEvent;

use crate::backend::BackendEvent;
use crate::i18n::{fill, t};
use crate::model::App;

pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::PageFetched { ticket, outcome } => {
            // 过期结果不影响状态栏
            if app.session.is_current(&ticket) {
                let texts = &t().status;
                match &outcome {
                    Err(e) => app.set_error(fill(texts.fetch_failed, "error", &e.source.to_string())),
                    Ok(page) if ticket.page == 1 && page.items.is_empty() => {
                        app.set_status(fill(texts.no_results_for, "query", &ticket.query));
                    }
                    Ok(_) => {}
                }
            }

            if let Some(SessionEvent::ScrollToAppended { first_new_index }) =
                app.session.complete(&ticket, outcome)
            {
                let len = app.session.state().results.len();
                app.grid.jump_to(first_new_index, len);
            }
        }

        BackendEvent::CredentialsChecked(result) => {
            let texts = &t().status;
            match result {
                Ok(true) => app.set_status(texts.key_ok),
                Ok(false) => app.set_error(texts.key_rejected),
                Err(e) => app.set_error(fill(texts.key_check_failed, "error", &e.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use image_search_core::FetchFailure;
    use image_search_provider::ProviderError;

    use super::*;
    use crate::model::{CARD_HEIGHT, CARD_WIDTH};
    use crate::update::test_support::{app, app_with_results, page};

    fn network_error() -> ProviderError {
        ProviderError::NetworkError {
            provider: "pixabay".to_string(),
            detail: "connection refused".to_string(),
        }
    }

    #[test]
    fn first_page_fills_results() {
        let mut app = app();
        let ticket = app.session.submit("cats").unwrap();
        update(
            &mut app,
            BackendEvent::PageFetched {
                ticket,
                outcome: Ok(page(0..12, 1, 30)),
            },
        );

        let vm = app.session.view_model();
        assert_eq!(vm.results.len(), 12);
        assert!(vm.has_more);
        assert!(app.status.is_none());
    }

    #[test]
    fn appended_page_moves_cursor_to_first_new_card() {
        let mut app = app_with_results("cats", 12, 30);
        app.grid.set_viewport(CARD_WIDTH * 3, CARD_HEIGHT * 2);
        let ticket = app.session.load_more().unwrap();

        update(
            &mut app,
            BackendEvent::PageFetched {
                ticket,
                outcome: Ok(page(12..24, 2, 30)),
            },
        );

        assert_eq!(app.grid.cursor, 12);
        assert!(app.grid.visible_range(24).contains(&12));
    }

    #[test]
    fn empty_first_page_reports_no_results() {
        let mut app = app();
        let ticket = app.session.submit("qwxzjv").unwrap();
        update(
            &mut app,
            BackendEvent::PageFetched {
                ticket,
                outcome: Ok(page(0..0, 1, 0)),
            },
        );

        assert!(!app.session.view_model().has_results);
        let status = app.status.as_ref().unwrap();
        assert!(!status.is_error);
        assert!(status.text.contains("qwxzjv"));
    }

    #[test]
    fn failure_shows_error_and_keeps_results() {
        let mut app = app_with_results("cats", 12, 30);
        let ticket = app.session.load_more().unwrap();
        update(
            &mut app,
            BackendEvent::PageFetched {
                ticket: ticket.clone(),
                outcome: Err(FetchFailure {
                    query: ticket.query.clone(),
                    page: ticket.page,
                    source: network_error(),
                }),
            },
        );

        let state = app.session.state();
        assert!(!state.is_loading);
        assert_eq!(state.results.len(), 12);
        assert_eq!(state.total_available, 30);
        let status = app.status.as_ref().unwrap();
        assert!(status.is_error);
        assert!(status.text.contains("connection refused"));
    }

    #[test]
    fn stale_page_is_dropped_silently() {
        let mut app = app();
        let stale = app.session.submit("cats").unwrap();
        app.session.submit("dogs").unwrap();

        update(
            &mut app,
            BackendEvent::PageFetched {
                ticket: stale,
                outcome: Ok(page(0..0, 1, 0)),
            },
        );

        assert!(app.status.is_none());
        assert!(app.session.state().is_loading);
        assert_eq!(app.session.state().query, "dogs");
    }

    #[test]
    fn credential_check_outcomes() {
        let mut app = app();
        update(&mut app, BackendEvent::CredentialsChecked(Ok(true)));
        assert!(!app.status.as_ref().unwrap().is_error);

        update(&mut app, BackendEvent::CredentialsChecked(Ok(false)));
        assert!(app.status.as_ref().unwrap().is_error);

        update(&mut app, BackendEvent::CredentialsChecked(Err(network_error())));
        assert!(app.status.as_ref().unwrap().text.contains("connection refused"));
    }
}
