use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::entities::catalog::Control;
use crate::domain::entities::custom_framework::{
    CustomFramework, CustomFrameworkId, NewCustomFramework,
};
use crate::infra::sqlite::schema::{init_db, open_connection};

pub fn create_framework(
    db_path: &Path,
    framework: &NewCustomFramework,
    created_at: &str,
) -> Result<i64> {
    init_db(db_path)?;
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start framework create transaction")?;

    tx.execute(
        "INSERT INTO custom_framework(name, short_name, description, use_logo, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            framework.name,
            framework.short_name,
            framework.description,
            framework.use_logo,
            created_at
        ],
    )
    .context("failed to insert framework")?;
    let framework_id = tx.last_insert_rowid();

    let mut insert_control = tx
        .prepare(
            "INSERT INTO custom_control(framework_id, row_idx, control_id, category, category_key, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .context("failed to prepare control insert")?;
    for (row_idx, control) in framework.controls.iter().enumerate() {
        insert_control
            .execute(params![
                framework_id,
                row_idx as i64,
                control.control_id,
                control.category,
                control.category_key,
                control.description
            ])
            .context("failed to insert control")?;
    }
    drop(insert_control);

    tx.commit().context("failed to commit framework create")?;
    Ok(framework_id)
}

pub fn list_frameworks(db_path: &Path) -> Result<Vec<CustomFramework>> {
    let conn = open_connection(db_path)?;

    let mut controls_by_framework: BTreeMap<i64, Vec<Control>> = BTreeMap::new();
    let mut control_stmt = conn
        .prepare(
            "SELECT framework_id, control_id, category, category_key, description
             FROM custom_control
             ORDER BY framework_id ASC, row_idx ASC",
        )
        .context("failed to prepare control query")?;
    let control_iter = control_stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                Control {
                    control_id: row.get(1)?,
                    category: row.get(2)?,
                    category_key: row.get(3)?,
                    description: row.get(4)?,
                },
            ))
        })
        .context("failed to query controls")?;
    for item in control_iter {
        let (framework_id, control) = item.context("failed to read control row")?;
        controls_by_framework
            .entry(framework_id)
            .or_default()
            .push(control);
    }

    let mut framework_stmt = conn
        .prepare(
            "SELECT id, name, short_name, description, use_logo, created_at
             FROM custom_framework
             ORDER BY id ASC",
        )
        .context("failed to prepare framework query")?;
    let framework_iter = framework_stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, bool>(4)?,
                row.get::<_, String>(5)?,
            ))
        })
        .context("failed to query frameworks")?;

    let mut frameworks = Vec::new();
    for item in framework_iter {
        let (id, name, short_name, description, use_logo, created_at) =
            item.context("failed to read framework row")?;
        frameworks.push(CustomFramework {
            id: CustomFrameworkId(id),
            name,
            short_name,
            description,
            use_logo,
            created_at,
            controls: controls_by_framework.remove(&id).unwrap_or_default(),
        });
    }

    Ok(frameworks)
}
