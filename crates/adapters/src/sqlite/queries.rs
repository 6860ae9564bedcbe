use iconfield_application::StoredRecord;
use rusqlite::{params, Connection};

pub(crate) fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table],
        |row| row.get(0),
    )?;
    Ok(count == 1)
}

pub(crate) fn fetch_records(
    conn: &Connection,
    table: &str,
    field: &str,
    versioned: bool,
) -> rusqlite::Result<Vec<StoredRecord>> {
    let mut statement = conn.prepare(&format!("SELECT ID, {field} FROM {table} ORDER BY ID"))?;
    let rows = statement.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, Option<String>>(1)?))
    })?;

    let mut records = Vec::new();
    for row in rows {
        let (id, icon_path) = row?;
        let published = versioned && is_published(conn, table, id)?;
        records.push(StoredRecord {
            id,
            icon_path,
            published,
        });
    }
    Ok(records)
}

// A versioned record counts as published when its live table carries a row
// with the same ID.
fn is_published(conn: &Connection, table: &str, id: i64) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {table}_Live WHERE ID = ?1"),
        params![id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub(crate) fn update_icon_path(
    conn: &mut Connection,
    table: &str,
    field: &str,
    record: &StoredRecord,
    new_path: &str,
    versioned: bool,
) -> rusqlite::Result<Vec<String>> {
    let tx = conn.transaction()?;
    let mut tables = Vec::new();

    tx.execute(
        &format!("UPDATE {table} SET {field} = ?1 WHERE ID = ?2"),
        params![new_path, record.id],
    )?;
    tables.push(table.to_string());

    if versioned {
        let versions_table = format!("{table}_Versions");
        tx.execute(
            &format!("UPDATE {versions_table} SET {field} = ?1 WHERE RecordID = ?2"),
            params![new_path, record.id],
        )?;
        tables.push(versions_table);

        if record.published {
            let live_table = format!("{table}_Live");
            tx.execute(
                &format!("UPDATE {live_table} SET {field} = ?1 WHERE ID = ?2"),
                params![new_path, record.id],
            )?;
            tables.push(live_table);
        }
    }

    tx.commit()?;
    Ok(tables)
}
