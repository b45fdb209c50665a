// ==========================================
// Report / cage service integration tests
// ==========================================
// Target: guard -> engine -> repository sequencing, server-side
// recompute of derived fields, referential deletion guard
// ==========================================

mod test_helpers;

use poultry_records::api::{ApiError, CageApi, DashboardApi, FlockApi, RecordsApi, ReportApi};
use poultry_records::domain::report::DailyReportInput;
use poultry_records::logging;
use poultry_records::repository::{
    CageRepository, DailyReportRepository, FeedPurchaseRepository, FlockRepository,
    HealthCheckRepository, TreatmentRepository,
};
use std::sync::Arc;

struct TestServices {
    cage_api: CageApi,
    flock_api: FlockApi,
    records_api: RecordsApi,
    report_api: ReportApi,
    dashboard_api: DashboardApi,
    report_repo: Arc<DailyReportRepository>,
}

fn create_services(db_path: &str) -> TestServices {
    let conn = test_helpers::open_shared_connection(db_path).expect("open conn");

    let cage_repo = Arc::new(CageRepository::from_connection(conn.clone()));
    let flock_repo = Arc::new(FlockRepository::from_connection(conn.clone()));
    let health_repo = Arc::new(HealthCheckRepository::from_connection(conn.clone()));
    let report_repo = Arc::new(DailyReportRepository::from_connection(conn.clone()));
    let treatment_repo = Arc::new(TreatmentRepository::from_connection(conn.clone()));
    let feed_repo = Arc::new(FeedPurchaseRepository::from_connection(conn));

    TestServices {
        cage_api: CageApi::new(cage_repo.clone(), flock_repo.clone()),
        flock_api: FlockApi::new(flock_repo.clone()),
        records_api: RecordsApi::new(
            health_repo.clone(),
            treatment_repo.clone(),
            feed_repo.clone(),
        ),
        report_api: ReportApi::new(report_repo.clone(), health_repo.clone()),
        dashboard_api: DashboardApi::new(
            cage_repo,
            flock_repo,
            health_repo,
            report_repo.clone(),
            treatment_repo,
            feed_repo,
        ),
        report_repo,
    }
}

fn report_input(flock_id: &str, cage_id: &str) -> DailyReportInput {
    DailyReportInput {
        report_date: "2025-12-08".to_string(),
        flock_id: flock_id.to_string(),
        cage_id: cage_id.to_string(),
        egg_count: 850.0,
        egg_weight_kg: 51.0,
        feed_given_kg: 61.2,
        live_birds: 1000.0,
        notes: Some("Normal".to_string()),
    }
}

#[test]
fn test_create_report_recomputes_derived_fields() {
    logging::init_test();
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let services = create_services(&db_path);

    let cage = services.cage_api.create_cage("A1", 1000, "Blok A").expect("cage");
    let flock = services
        .flock_api
        .create_flock(&cage.cage_id, 1000)
        .expect("flock");

    // Lifetime mortality: 3 + 5 dead across two checks
    services
        .records_api
        .create_health_check("2025-12-06", &flock.flock_id, 2, 3, None)
        .expect("check 1");
    services
        .records_api
        .create_health_check("2025-12-07", &flock.flock_id, 0, 5, Some("flu"))
        .expect("check 2");

    let report = services
        .report_api
        .create_report(&report_input(&flock.flock_id, &cage.cage_id))
        .expect("report");

    assert_eq!(report.hd_percent, 85.0);
    assert_eq!(report.fcr, 1.2);
    assert_eq!(report.cumulative_deaths, 8);

    // And the stored row carries the same derived values
    let stored = services
        .report_repo
        .find_by_id(&report.report_id)
        .expect("find")
        .expect("some");
    assert_eq!(stored.hd_percent, 85.0);
    assert_eq!(stored.fcr, 1.2);
    assert_eq!(stored.cumulative_deaths, 8);
}

#[test]
fn test_create_report_rejects_missing_fields() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let services = create_services(&db_path);

    let mut input = report_input("", "c1");
    let err = services.report_api.create_report(&input).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    input.flock_id = "f1".to_string();
    input.report_date = String::new();
    let err = services.report_api.create_report(&input).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
fn test_create_report_rejects_malformed_date() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let services = create_services(&db_path);

    let mut input = report_input("f1", "c1");
    input.report_date = "08/12/2025".to_string();
    let err = services.report_api.create_report(&input).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
fn test_create_report_clamps_negative_quantities() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let services = create_services(&db_path);

    let cage = services.cage_api.create_cage("A1", 1000, "Blok A").expect("cage");
    let flock = services
        .flock_api
        .create_flock(&cage.cage_id, 1000)
        .expect("flock");

    let mut input = report_input(&flock.flock_id, &cage.cage_id);
    input.feed_given_kg = -10.0;
    input.egg_weight_kg = -1.0;

    let report = services.report_api.create_report(&input).expect("report");
    assert_eq!(report.feed_given_kg, 0.0);
    assert_eq!(report.egg_weight_kg, 0.0);
    assert_eq!(report.fcr, 0.0);
    assert_eq!(report.hd_percent, 85.0);
}

#[test]
fn test_update_report_recomputes_and_checks_existence() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let services = create_services(&db_path);

    let cage = services.cage_api.create_cage("A1", 1000, "Blok A").expect("cage");
    let flock = services
        .flock_api
        .create_flock(&cage.cage_id, 1000)
        .expect("flock");

    let input = report_input(&flock.flock_id, &cage.cage_id);
    let report = services.report_api.create_report(&input).expect("report");

    // A later health check changes the rollup on the next write
    services
        .records_api
        .create_health_check("2025-12-08", &flock.flock_id, 0, 4, None)
        .expect("check");

    let mut changed = input.clone();
    changed.egg_count = 900.0;
    let updated = services
        .report_api
        .update_report(&report.report_id, &changed)
        .expect("update");
    assert_eq!(updated.hd_percent, 90.0);
    assert_eq!(updated.cumulative_deaths, 4);

    let err = services
        .report_api
        .update_report("no-such-report", &changed)
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
fn test_cage_deletion_guarded_then_allowed() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let services = create_services(&db_path);

    let cage = services.cage_api.create_cage("B2", 500, "Blok B").expect("cage");
    let flock = services
        .flock_api
        .create_flock(&cage.cage_id, 400)
        .expect("flock");

    let err = services.cage_api.delete_cage(&cage.cage_id).unwrap_err();
    match err {
        ApiError::ReferentialConflict(msg) => assert!(msg.contains(&cage.cage_id)),
        other => panic!("expected ReferentialConflict, got {other:?}"),
    }

    services.flock_api.delete_flock(&flock.flock_id).expect("delete flock");
    services.cage_api.delete_cage(&cage.cage_id).expect("delete cage");
}

#[test]
fn test_dashboard_summary_aggregates() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let services = create_services(&db_path);

    let cage = services.cage_api.create_cage("A1", 1000, "Blok A").expect("cage");
    let flock = services
        .flock_api
        .create_flock(&cage.cage_id, 800)
        .expect("flock");

    services
        .records_api
        .create_health_check("2025-12-07", &flock.flock_id, 1, 5, None)
        .expect("check");
    services
        .report_api
        .create_report(&report_input(&flock.flock_id, &cage.cage_id))
        .expect("report");
    services
        .records_api
        .create_feed_purchase("Konsentrat", "2025-12-01", 1_500_000.0)
        .expect("feed");
    services
        .records_api
        .create_treatment("2025-12-02", &flock.flock_id, "Vaksin ND", 250_000.0, None)
        .expect("treatment");

    let summary = services.dashboard_api.summary().expect("summary");
    assert_eq!(summary.total_birds, 800);
    assert_eq!(summary.total_capacity, 1000);
    assert_eq!(summary.capacity_utilization, 80.0);
    assert_eq!(summary.total_eggs, 850);
    assert_eq!(summary.total_deaths, 5);
    assert_eq!(summary.feed_cost, 1_500_000.0);
    assert_eq!(summary.treatment_cost, 250_000.0);

    assert_eq!(
        services
            .records_api
            .cumulative_deaths(&flock.flock_id)
            .expect("rollup"),
        5
    );
    assert_eq!(services.records_api.total_feed_cost().expect("cost"), 1_500_000.0);
}
