use anyhow::{bail, Result};
use rusqlite::{params, Row};
use uuid::Uuid;

use crate::db::{
    connection::Database,
    helpers::{parse_datetime, parse_uuid},
    models::Item,
};

fn row_to_item(row: &Row) -> Result<Item> {
    let id: String = row.get("id")?;
    let order_date: String = row.get("order_date")?;

    Ok(Item {
        id: parse_uuid(&id, "id")?,
        name: row.get("name")?,
        category: row.get("category")?,
        brand: row.get("brand")?,
        size: row.get("size")?,
        fit: row.get("fit")?,
        satisfaction: row.get("satisfaction")?,
        color: row.get("color")?,
        price: row.get("price")?,
        order_date: parse_datetime(&order_date, "order_date")?,
        url: row.get("url")?,
        note: row.get("note")?,
    })
}

impl Database {
    pub fn insert_item(&self, item: &Item) -> Result<()> {
        self.execute(|conn| {
            conn.execute(
                "INSERT INTO items (id, name, category, brand, size, fit, satisfaction, color, price, order_date, url, note)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    item.id.to_string(),
                    item.name,
                    item.category,
                    item.brand,
                    item.size,
                    item.fit,
                    item.satisfaction,
                    item.color,
                    item.price,
                    item.order_date.to_rfc3339(),
                    item.url,
                    item.note,
                ],
            )?;
            Ok(())
        })
    }

    pub fn get_item(&self, id: Uuid) -> Result<Option<Item>> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, category, brand, size, fit, satisfaction, color, price, order_date, url, note
                 FROM items
                 WHERE id = ?1",
            )?;

            let mut rows = stmt.query(params![id.to_string()])?;
            let item = match rows.next()? {
                Some(row) => Some(row_to_item(row)?),
                None => None,
            };
            Ok(item)
        })
    }

    /// All items, most recent order date first (the main-list order).
    pub fn list_items(&self) -> Result<Vec<Item>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, category, brand, size, fit, satisfaction, color, price, order_date, url, note
                 FROM items
                 ORDER BY order_date DESC",
            )?;

            let mut rows = stmt.query([])?;
            let mut items = Vec::new();
            while let Some(row) = rows.next()? {
                items.push(row_to_item(row)?);
            }

            Ok(items)
        })
    }

    /// Full-field rewrite of one item.
    pub fn update_item(&self, item: &Item) -> Result<()> {
        self.execute(|conn| {
            let rows_affected = conn.execute(
                "UPDATE items
                 SET name = ?1,
                     category = ?2,
                     brand = ?3,
                     size = ?4,
                     fit = ?5,
                     satisfaction = ?6,
                     color = ?7,
                     price = ?8,
                     order_date = ?9,
                     url = ?10,
                     note = ?11
                 WHERE id = ?12",
                params![
                    item.name,
                    item.category,
                    item.brand,
                    item.size,
                    item.fit,
                    item.satisfaction,
                    item.color,
                    item.price,
                    item.order_date.to_rfc3339(),
                    item.url,
                    item.note,
                    item.id.to_string(),
                ],
            )?;

            if rows_affected == 0 {
                bail!("item {} not found", item.id);
            }
            Ok(())
        })
    }

    pub fn delete_item(&self, id: Uuid) -> Result<()> {
        self.execute(move |conn| {
            let rows_affected = conn.execute(
                "DELETE FROM items WHERE id = ?1",
                params![id.to_string()],
            )?;

            if rows_affected == 0 {
                bail!("item {id} not found");
            }
            Ok(())
        })
    }
}
