mod common;

use diesel::connection::SimpleConnection;

#[test]
fn test_pool_hands_out_migrated_connections() {
    let test_db = common::TestDb::new("test_pool_connection.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());

    let mut conn = conn.unwrap();
    assert!(conn.batch_execute("SELECT id, name, specialty_id FROM doctors").is_ok());
    assert!(conn.batch_execute("SELECT id, name FROM specialties").is_ok());
}
