use anyhow::{bail, Result};
use log::debug;
use rusqlite::{params, Row};
use uuid::Uuid;

use crate::db::{
    connection::Database,
    helpers::{parse_datetime, parse_kind, parse_uuid},
    models::{Label, LabelKind, LabelOrigin},
};

/// The `items` column that stores names of this kind.
fn item_column(kind: LabelKind) -> &'static str {
    match kind {
        LabelKind::Category => "category",
        LabelKind::Brand => "brand",
        LabelKind::Color => "color",
        LabelKind::Fit => "fit",
        LabelKind::Satisfaction => "satisfaction",
        LabelKind::Size => "size",
    }
}

fn row_to_label(row: &Row) -> Result<Label> {
    let id: String = row.get("id")?;
    let kind: String = row.get("kind")?;
    let created_at: String = row.get("created_at")?;

    Ok(Label {
        id: parse_uuid(&id, "id")?,
        kind: parse_kind(&kind)?,
        name: row.get("name")?,
        created_at: parse_datetime(&created_at, "created_at")?,
        origin: LabelOrigin::Custom,
    })
}

impl Database {
    /// All persisted custom labels of one kind, newest first.
    pub(crate) fn get_custom_labels(&self, kind: LabelKind) -> Result<Vec<Label>> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, kind, name, created_at
                 FROM labels
                 WHERE kind = ?1
                 ORDER BY created_at DESC",
            )?;

            let mut rows = stmt.query(params![kind.as_str()])?;
            let mut labels = Vec::new();
            while let Some(row) = rows.next()? {
                labels.push(row_to_label(row)?);
            }

            Ok(labels)
        })
    }

    pub(crate) fn insert_custom_label(&self, label: &Label) -> Result<()> {
        self.execute(|conn| {
            conn.execute(
                "INSERT INTO labels (id, kind, name, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    label.id.to_string(),
                    label.kind.as_str(),
                    label.name,
                    label.created_at.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
    }

    /// Delete a custom label and repoint every item field that referenced
    /// its name to the kind's fallback, in one transaction.
    pub(crate) fn delete_custom_label(&self, id: Uuid) -> Result<()> {
        self.execute(move |conn| {
            let tx = conn.transaction()?;

            let label = {
                let mut stmt = tx.prepare(
                    "SELECT id, kind, name, created_at
                     FROM labels
                     WHERE id = ?1",
                )?;
                let mut rows = stmt.query(params![id.to_string()])?;
                match rows.next()? {
                    Some(row) => row_to_label(row)?,
                    None => bail!("custom label {id} not found"),
                }
            };

            tx.execute(
                "DELETE FROM labels WHERE id = ?1",
                params![id.to_string()],
            )?;

            let column = item_column(label.kind);
            let repaired = tx.execute(
                &format!("UPDATE items SET {column} = ?1 WHERE {column} = ?2"),
                params![label.kind.fallback_name(), label.name],
            )?;

            tx.commit()?;

            if repaired > 0 {
                debug!(
                    "Repointed {repaired} item(s) from deleted {} label '{}' to '{}'",
                    label.kind,
                    label.name,
                    label.kind.fallback_name()
                );
            }

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn custom_at(kind: LabelKind, name: &str, offset_secs: i64) -> Label {
        let mut label = Label::new_custom(kind, name);
        label.created_at = Utc::now() + Duration::seconds(offset_secs);
        label
    }

    #[test]
    fn customs_come_back_newest_first() {
        let db = Database::open_in_memory().unwrap();
        db.insert_custom_label(&custom_at(LabelKind::Brand, "Acne", 0))
            .unwrap();
        db.insert_custom_label(&custom_at(LabelKind::Brand, "Lemaire", 10))
            .unwrap();
        db.insert_custom_label(&custom_at(LabelKind::Brand, "Margiela", 5))
            .unwrap();

        let names: Vec<String> = db
            .get_custom_labels(LabelKind::Brand)
            .unwrap()
            .into_iter()
            .map(|label| label.name)
            .collect();
        assert_eq!(names, ["Lemaire", "Margiela", "Acne"]);
    }

    #[test]
    fn kinds_are_isolated() {
        let db = Database::open_in_memory().unwrap();
        db.insert_custom_label(&Label::new_custom(LabelKind::Brand, "Acne"))
            .unwrap();
        db.insert_custom_label(&Label::new_custom(LabelKind::Color, "Teal"))
            .unwrap();

        let brands = db.get_custom_labels(LabelKind::Brand).unwrap();
        assert_eq!(brands.len(), 1);
        assert_eq!(brands[0].name, "Acne");
        assert_eq!(brands[0].kind, LabelKind::Brand);

        let colors = db.get_custom_labels(LabelKind::Color).unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].name, "Teal");
    }

    #[test]
    fn loaded_labels_are_marked_custom() {
        let db = Database::open_in_memory().unwrap();
        db.insert_custom_label(&Label::new_custom(LabelKind::Fit, "Boxy"))
            .unwrap();

        let fits = db.get_custom_labels(LabelKind::Fit).unwrap();
        assert!(fits[0].is_custom());
    }

    #[test]
    fn delete_unknown_label_fails() {
        let db = Database::open_in_memory().unwrap();
        let err = db.delete_custom_label(Uuid::new_v4()).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn delete_repoints_referencing_items_to_fallback() {
        use crate::db::models::Item;

        let db = Database::open_in_memory().unwrap();
        let teal = Label::new_custom(LabelKind::Color, "Teal");
        db.insert_custom_label(&teal).unwrap();

        let mut shirt = Item::new("Camp shirt");
        shirt.color = "Teal".to_string();
        db.insert_item(&shirt).unwrap();

        let mut cap = Item::new("Cap");
        cap.color = "Navy".to_string();
        db.insert_item(&cap).unwrap();

        db.delete_custom_label(teal.id).unwrap();

        let shirt = db.get_item(shirt.id).unwrap().unwrap();
        assert_eq!(shirt.color, "None");
        let cap = db.get_item(cap.id).unwrap().unwrap();
        assert_eq!(cap.color, "Navy");
        assert!(db.get_custom_labels(LabelKind::Color).unwrap().is_empty());
    }
}
