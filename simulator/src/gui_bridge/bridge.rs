use crate::generator::profile::{build_probe_readings, GeneratorConfig};
use crate::gui_bridge::model::SummaryModel;
use crate::workflow::runner::Runner;
use anyhow::Result;
use attendcore::session::{ProbeReading, Session};
use chrono::Utc;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn bridge_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// Bridge that hosts the attendance HTTP endpoint and feeds incoming
/// check-ins through the workflow runner.
pub struct GuiBridge {
    state: Arc<RwLock<SummaryModel>>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>, session: Arc<Session>) -> Self {
        let state = Arc::new(RwLock::new(SummaryModel::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());
        let session_filter = warp::any().map(move || session.clone());

        let get_route = warp::path("summary")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<SummaryModel>>| warp::reply::json(&*state.read().unwrap()));

        let checkin_route = warp::path("checkin")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and(session_filter.clone())
            .and_then(
                |reading: ProbeReading,
                 state: Arc<RwLock<SummaryModel>>,
                 runner: Arc<Runner>,
                 session: Arc<Session>| async move {
                    match runner.execute(&session, std::slice::from_ref(&reading)) {
                        Ok(result) => {
                            let mut guard = state.write().unwrap();
                            guard.session_id = session.session_id.clone();
                            guard.absorb(&result);
                            let status = result
                                .records
                                .first()
                                .map(|record| record.final_status.to_string())
                                .unwrap_or_else(|| "rejected".into());
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "attendance": status,
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("checkin error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let generator_route = warp::path("checkin-config")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and(session_filter)
            .and_then(
                |config: GeneratorConfig,
                 state: Arc<RwLock<SummaryModel>>,
                 runner: Arc<Runner>,
                 session: Arc<Session>| async move {
                    let outcome = build_probe_readings(
                        &config,
                        &session.coordinates,
                        session.roster.students(),
                        Utc::now(),
                    )
                    .and_then(|readings| runner.execute(&session, &readings));
                    match outcome {
                        Ok(result) => {
                            let mut guard = state.write().unwrap();
                            *guard = SummaryModel::from_result(&session.session_id, &result);
                            println!(
                                "[GUI] Batch -> present {}, check {}, proxy {}, not in list {}",
                                guard.present, guard.check, guard.proxy, guard.not_in_list
                            );
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "evaluated": guard.records.len(),
                                    "rejected": guard.rejected,
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("checkin-config error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(checkin_route).or(generator_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(bridge_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &SummaryModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[GUI] session {}: {} records, {} rejected",
            guard.session_id,
            guard.records.len(),
            guard.rejected
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> SummaryModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_roster;
    use crate::workflow::config::SessionSpec;
    use chrono::Utc;
    use std::sync::Arc;

    #[test]
    fn gui_bridge_updates_state() {
        let mut spec = SessionSpec::from_args(12.9716, 77.5946, 6.0, 10);
        spec.roster = build_roster(8);
        let session = Arc::new(spec.build_session(Utc::now()).unwrap());
        let runner = Arc::new(Runner::new(spec));
        let gui = GuiBridge::new(runner.clone(), session.clone());

        let readings = build_probe_readings(
            &GeneratorConfig::default(),
            &session.coordinates,
            session.roster.students(),
            Utc::now(),
        )
        .unwrap();
        let result = runner.execute(&session, &readings).unwrap();
        let model = SummaryModel::from_result(&session.session_id, &result);
        gui.publish(&model).unwrap();

        assert_eq!(gui.snapshot().records.len(), result.records.len());
    }
}
