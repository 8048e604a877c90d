use crux_core::{render::render, Command};
use log::{debug, info, warn};

use crate::device_post;
use crate::events::{Event, ScanEvent};
use crate::model::Model;
use crate::types::{
    resolve_auth_label, AuthMode, ControlOrigin, ScanResponse, ScanResult, ScanState,
    FetchError, SCAN_ENDPOINT, SCAN_REQUEST_MARKER, UNKNOWN_AUTH_LABEL,
};
use crate::Effect;

/// Request the access point list; only the first call per page does anything
pub fn fetch(model: &mut Model) -> Command<Effect, Event> {
    if model.scan_state != ScanState::Idle {
        debug!("scan already requested ({:?}), ignoring", model.scan_state);
        return Command::done();
    }

    info!("requesting access point list");
    model.scan_state = ScanState::Loading;
    model.clear_error();

    device_post!(Scan, ScanEvent, SCAN_ENDPOINT, FetchResponse,
        body_string: SCAN_REQUEST_MARKER,
        expect_json: ScanResponse
    )
}

/// Handle scan domain events
pub fn handle(event: ScanEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ScanEvent::FetchResponse(result) => handle_fetch_response(result, model),

        ScanEvent::FetchTimeout => {
            if !model.scan_state.is_loading() {
                return Command::done();
            }
            warn!("scan request timed out");
            model.fail_scan(FetchError::TimedOut);
            render()
        }

        ScanEvent::AddNew {
            ssid,
            auth_label,
            rssi,
        } => {
            let control = model
                .networks
                .append(ssid, None, auth_label, rssi, ControlOrigin::Manual);
            debug!("added manual entry {}", control.key);
            debug!(
                "{} manual entries in list",
                model.networks.count_by_origin(ControlOrigin::Manual)
            );
            render()
        }
    }
}

fn handle_fetch_response(
    result: Result<ScanResponse, FetchError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    // A response after a timeout must not render a list the user was told failed
    if !model.scan_state.is_loading() {
        warn!("ignoring scan response in state {:?}", model.scan_state);
        return Command::done();
    }

    match result.and_then(ScanResult::try_from) {
        Ok(scan) => {
            render_scan(scan, model);
            render()
        }
        Err(e) => {
            warn!("scan failed: {e}");
            model.fail_scan(e);
            render()
        }
    }
}

/// Append one control per record, in report order, in a single burst
fn render_scan(scan: ScanResult, model: &mut Model) {
    let count = scan.len() as u32;

    for record in scan.records {
        let auth_mode = AuthMode::from_code(record.auth_code);
        let auth_label = resolve_auth_label(record.auth_code).unwrap_or_else(|| {
            debug!("unknown authmode {} for {:?}", record.auth_code, record.ssid);
            UNKNOWN_AUTH_LABEL
        });

        model.networks.append(
            record.ssid,
            auth_mode,
            auth_label.to_string(),
            record.rssi,
            ControlOrigin::Scanned,
        );
    }

    info!("rendered {count} networks");
    model.scan_state = if count == 0 {
        ScanState::Empty
    } else {
        ScanState::Loaded { count }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApRecord;

    fn record(ssid: &str, authmode: i64, rssi: i32) -> ApRecord {
        ApRecord {
            ssid: ssid.to_string(),
            rssi,
            authmode,
        }
    }

    fn loading_model() -> Model {
        Model {
            scan_state: ScanState::Loading,
            ..Default::default()
        }
    }

    fn labels(model: &Model) -> Vec<&str> {
        model
            .networks
            .controls
            .iter()
            .map(|c| c.label.as_str())
            .collect()
    }

    mod fetch {
        use super::*;

        #[test]
        fn moves_to_loading_and_clears_error() {
            let mut model = Model {
                error_message: Some("old".to_string()),
                ..Default::default()
            };

            let _ = fetch(&mut model);

            assert_eq!(model.scan_state, ScanState::Loading);
            assert_eq!(model.error_message, None);
        }

        #[test]
        fn issues_single_post_with_marker_body() {
            let mut model = Model::default();

            let mut cmd = fetch(&mut model);
            let requests: Vec<_> = cmd
                .effects()
                .filter_map(|effect| match effect {
                    Effect::Http(request) => Some(request.operation),
                    _ => None,
                })
                .collect();

            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].method, "POST");
            assert_eq!(
                requests[0].url,
                "http://relative/listofScannedWifiNetworks"
            );
            assert_eq!(requests[0].body, b"listofScannedWifiNetworks".to_vec());
        }

        #[test]
        fn second_request_is_ignored() {
            let mut model = loading_model();

            let mut cmd = fetch(&mut model);

            assert_eq!(cmd.effects().count(), 0);
            assert_eq!(model.scan_state, ScanState::Loading);
        }

        #[test]
        fn no_new_fetch_after_scan_finished() {
            let mut model = Model {
                scan_state: ScanState::Empty,
                ..Default::default()
            };

            let _ = fetch(&mut model);

            assert_eq!(model.scan_state, ScanState::Empty);
        }
    }

    mod response {
        use super::*;

        #[test]
        fn renders_one_control_per_record_in_order() {
            let mut model = loading_model();
            let response =
                ScanResponse::new(4, vec![record("Home", 3, -40), record("Cafe", 0, -70)]);

            let _ = handle(ScanEvent::FetchResponse(Ok(response)), &mut model);

            assert_eq!(
                labels(&model),
                [
                    "SSID: Home Authmode: WPA2_PSK RSSI: -40",
                    "SSID: Cafe Authmode: OPEN RSSI: -70"
                ]
            );
            assert_eq!(model.scan_state, ScanState::Loaded { count: 2 });
            assert_eq!(model.networks.controls[0].auth_mode, Some(AuthMode::Wpa2Psk));
            assert_eq!(model.error_message, None);
        }

        #[test]
        fn unknown_authmode_uses_placeholder() {
            let mut model = loading_model();
            let response = ScanResponse::new(0, vec![record("Odd", 42, -55)]);

            let _ = handle(ScanEvent::FetchResponse(Ok(response)), &mut model);

            let control = &model.networks.controls[0];
            assert_eq!(control.auth_mode, None);
            assert_eq!(control.label, "SSID: Odd Authmode: UNKNOWN RSSI: -55");
        }

        #[test]
        fn empty_list_is_distinct_from_failure() {
            let mut model = loading_model();

            let _ = handle(
                ScanEvent::FetchResponse(Ok(ScanResponse::default())),
                &mut model,
            );

            assert_eq!(model.scan_state, ScanState::Empty);
            assert!(model.networks.is_empty());
            assert_eq!(model.error_message, None);
        }

        #[test]
        fn count_mismatch_renders_nothing() {
            let mut model = loading_model();
            let response = ScanResponse {
                status: 0,
                ap_count: 3,
                ap_records: vec![record("a", 0, -1), record("b", 0, -2)],
            };

            let _ = handle(ScanEvent::FetchResponse(Ok(response)), &mut model);

            assert!(model.networks.is_empty());
            assert_eq!(
                model.scan_state,
                ScanState::Failed(FetchError::CountMismatch {
                    declared: 3,
                    received: 2
                })
            );
            assert!(model.error_message.is_some());
        }

        #[test]
        fn not_ready_status_renders_nothing_and_reports() {
            let mut model = loading_model();
            let error = FetchError::NotReady {
                status: 503,
                message: "busy".to_string(),
            };

            let _ = handle(ScanEvent::FetchResponse(Err(error.clone())), &mut model);

            assert!(model.networks.is_empty());
            assert_eq!(model.scan_state, ScanState::Failed(error.clone()));
            assert_eq!(model.error_message, Some(error.to_string()));
        }

        #[test]
        fn duplicate_ssids_get_distinct_keys() {
            let mut model = loading_model();
            let response =
                ScanResponse::new(0, vec![record("Mesh", 3, -40), record("Mesh", 3, -75)]);

            let _ = handle(ScanEvent::FetchResponse(Ok(response)), &mut model);

            let controls = &model.networks.controls;
            assert_eq!(controls.len(), 2);
            assert_ne!(controls[0].key, controls[1].key);
            assert_eq!(controls[1].duplicate_of.as_deref(), Some(controls[0].key.as_str()));
        }

        #[test]
        fn late_response_after_timeout_is_ignored() {
            let mut model = loading_model();

            let _ = handle(ScanEvent::FetchTimeout, &mut model);
            let _ = handle(
                ScanEvent::FetchResponse(Ok(ScanResponse::new(0, vec![record("Late", 0, -30)]))),
                &mut model,
            );

            assert!(model.networks.is_empty());
            assert_eq!(model.scan_state, ScanState::Failed(FetchError::TimedOut));
        }
    }

    mod device_response {
        use super::*;
        use crux_http::protocol::{HttpResponse, HttpResult};

        /// Run `Initialize`, answer the scan request and feed the events back
        fn resolve_scan(response: HttpResponse) -> Model {
            let mut model = Model::default();
            let mut cmd = crate::update::update(Event::Initialize, &mut model);

            let mut request = cmd
                .effects()
                .find_map(|effect| match effect {
                    Effect::Http(request) => Some(request),
                    _ => None,
                })
                .expect("scan should issue an HTTP request");
            request
                .resolve(HttpResult::Ok(response))
                .expect("request should resolve");

            for event in cmd.events().collect::<Vec<_>>() {
                let _ = crate::update::update(event, &mut model);
            }
            model
        }

        #[test]
        fn ok_response_renders_list() {
            let model = resolve_scan(
                HttpResponse::ok()
                    .body(r#"{"status":4,"ap_count":1,"ap_records":[{"ssid":"Home","rssi":-40,"authmode":3}]}"#)
                    .build(),
            );

            assert_eq!(model.scan_state, ScanState::Loaded { count: 1 });
            assert_eq!(labels(&model), ["SSID: Home Authmode: WPA2_PSK RSSI: -40"]);
        }

        #[test]
        fn service_unavailable_is_not_ready_with_body() {
            let model = resolve_scan(HttpResponse::status(503).body("busy").build());

            assert!(model.networks.is_empty());
            assert_eq!(
                model.scan_state,
                ScanState::Failed(FetchError::NotReady {
                    status: 503,
                    message: "busy".to_string()
                })
            );
            assert!(model.error_message.is_some());
        }

        #[test]
        fn garbage_body_is_malformed() {
            let model = resolve_scan(HttpResponse::ok().body("<html>oops</html>").build());

            assert!(model.networks.is_empty());
            assert!(matches!(
                model.scan_state,
                ScanState::Failed(FetchError::Malformed { .. })
            ));
        }

        #[test]
        fn created_status_is_not_ready() {
            let model = resolve_scan(
                HttpResponse::status(201)
                    .body(r#"{"ap_count":1,"ap_records":[{"ssid":"Home","rssi":-40,"authmode":3}]}"#)
                    .build(),
            );

            assert!(model.networks.is_empty());
            assert!(matches!(
                model.scan_state,
                ScanState::Failed(FetchError::NotReady { status: 201, .. })
            ));
        }
    }

    mod timeout {
        use super::*;

        #[test]
        fn fails_pending_scan() {
            let mut model = loading_model();

            let _ = handle(ScanEvent::FetchTimeout, &mut model);

            assert_eq!(model.scan_state, ScanState::Failed(FetchError::TimedOut));
            assert!(model.error_message.is_some());
        }

        #[test]
        fn ignored_when_scan_already_loaded() {
            let mut model = Model {
                scan_state: ScanState::Loaded { count: 1 },
                ..Default::default()
            };

            let _ = handle(ScanEvent::FetchTimeout, &mut model);

            assert_eq!(model.scan_state, ScanState::Loaded { count: 1 });
            assert_eq!(model.error_message, None);
        }
    }

    mod add_new {
        use super::*;

        #[test]
        fn appends_literal_manual_control_without_scan() {
            let mut model = Model::default();

            let _ = handle(
                ScanEvent::AddNew {
                    ssid: "Test".to_string(),
                    auth_label: "WEP".to_string(),
                    rssi: -50,
                },
                &mut model,
            );

            assert_eq!(labels(&model), ["SSID: Test Authmode: WEP RSSI: -50"]);
            assert_eq!(model.networks.controls[0].origin, ControlOrigin::Manual);
            assert_eq!(model.scan_state, ScanState::Idle);
        }

        #[test]
        fn manual_entry_after_scan_gets_fresh_key() {
            let mut model = loading_model();
            let _ = handle(
                ScanEvent::FetchResponse(Ok(ScanResponse::new(0, vec![record("Test", 1, -60)]))),
                &mut model,
            );

            let _ = handle(
                ScanEvent::AddNew {
                    ssid: "Test".to_string(),
                    auth_label: "WEP".to_string(),
                    rssi: -50,
                },
                &mut model,
            );

            let controls = &model.networks.controls;
            assert_eq!(controls.len(), 2);
            assert_ne!(controls[0].key, controls[1].key);
        }
    }
}
