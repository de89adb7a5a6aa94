//! PDF maintenance report generation
//!
//! Renders the equipment schedule, recent maintenance history, machine
//! readings, and summary counts into a Letter-format PDF. Data is
//! fetched up front, already filtered and sorted; rendering itself is
//! pure layout.

use chrono::{DateTime, NaiveDate, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    config::ReportsConfig,
    error::{AppError, AppResult},
    models::{
        enums::{EquipmentCategory, MaintenanceStatus},
        equipment::Equipment,
        maintenance::{MaintenanceLog, MaintenanceLogQuery},
        reading::MachineReading,
    },
    repository::Repository,
};

// US Letter
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const TOP_MARGIN_MM: f32 = 262.0;
const BOTTOM_MARGIN_MM: f32 = 18.0;
const LEFT_MARGIN_MM: f32 = 15.0;

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
    config: ReportsConfig,
}

impl ReportsService {
    pub fn new(repository: Repository, config: ReportsConfig) -> Self {
        Self { repository, config }
    }

    /// Generate the maintenance report PDF, optionally restricted to
    /// maintenance events within a date range.
    pub async fn maintenance_report(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<Vec<u8>> {
        let equipment = self.repository.equipment.list().await?;
        let logs = self
            .repository
            .maintenance
            .list(&MaintenanceLogQuery {
                equipment_id: None,
                from,
                to,
            })
            .await?;
        let readings = self.repository.readings.list(None).await?;

        render_report(
            &equipment,
            &logs,
            &readings,
            Utc::now(),
            self.config.max_history_rows,
        )
        .map_err(|e| AppError::Report(e.to_string()))
    }
}

/// Cursor over the current page; adds pages as sections overflow
struct ReportWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl ReportWriter {
    fn new(title: &str) -> Result<(Self, IndirectFontRef, IndirectFontRef), printpdf::Error> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok((
            Self {
                doc,
                layer,
                y: TOP_MARGIN_MM,
            },
            regular,
            bold,
        ))
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < BOTTOM_MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_MARGIN_MM;
        }
    }

    fn text_at(&self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        self.ensure_space(6.0);
        self.text_at(text, size, LEFT_MARGIN_MM, font);
        self.y -= 6.0;
    }

    fn heading(&mut self, text: &str, font: &IndirectFontRef) {
        self.ensure_space(14.0);
        self.y -= 4.0;
        self.text_at(text, 14.0, LEFT_MARGIN_MM, font);
        self.y -= 8.0;
    }

    fn finish(self) -> Result<Vec<u8>, printpdf::Error> {
        self.doc.save_to_bytes()
    }
}

fn display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

fn render_report(
    equipment: &[Equipment],
    logs: &[MaintenanceLog],
    readings: &[MachineReading],
    generated_at: DateTime<Utc>,
    max_history_rows: usize,
) -> Result<Vec<u8>, printpdf::Error> {
    let (mut w, regular, bold) = ReportWriter::new("Factory Maintenance Report")?;

    let names: HashMap<Uuid, &str> = equipment
        .iter()
        .map(|e| (e.id, e.name.as_str()))
        .collect();
    let name_of = |id: Uuid| names.get(&id).copied().unwrap_or("Unknown");

    // Title block
    w.text_at("Factory Maintenance Report", 20.0, 55.0, &bold);
    w.y -= 8.0;
    w.text_at(
        &format!("Generated: {}", generated_at.format("%B %d, %Y %H:%M")),
        10.0,
        72.0,
        &regular,
    );
    w.y -= 12.0;

    // Equipment schedule table
    w.heading("Equipment Schedule", &bold);
    w.ensure_space(6.0);
    w.text_at("Name", 10.0, LEFT_MARGIN_MM, &bold);
    w.text_at("Category", 10.0, 75.0, &bold);
    w.text_at("Next Maintenance", 10.0, 115.0, &bold);
    w.text_at("Status", 10.0, 165.0, &bold);
    w.y -= 6.0;

    for eq in equipment {
        w.ensure_space(6.0);
        let next = eq
            .next_maintenance_due
            .map(display_date)
            .unwrap_or_else(|| "Not scheduled".to_string());
        w.text_at(&eq.name, 10.0, LEFT_MARGIN_MM, &regular);
        w.text_at(
            &EquipmentCategory::from(eq.category).to_string(),
            10.0,
            75.0,
            &regular,
        );
        w.text_at(&next, 10.0, 115.0, &regular);
        w.text_at(
            &MaintenanceStatus::from(eq.maintenance_status).to_string(),
            10.0,
            165.0,
            &regular,
        );
        w.y -= 6.0;
    }

    // Maintenance history, newest first, capped
    w.heading("Maintenance History (latest)", &bold);
    for log in logs.iter().take(max_history_rows) {
        w.ensure_space(12.0);
        w.text_at(
            &format!("{} - {}", display_date(log.date), name_of(log.equipment_id)),
            10.0,
            LEFT_MARGIN_MM,
            &bold,
        );
        w.y -= 5.0;
        w.text_at(
            &format!("Technician: {} - {}", log.performed_by, log.notes),
            9.0,
            LEFT_MARGIN_MM + 4.0,
            &regular,
        );
        w.y -= 5.0;
        for part in log.parts_used.iter() {
            w.ensure_space(5.0);
            w.text_at(
                &format!(
                    "- {} x{} @ ${:.2}",
                    part.part_name, part.quantity, part.cost
                ),
                9.0,
                LEFT_MARGIN_MM + 8.0,
                &regular,
            );
            w.y -= 5.0;
        }
        w.y -= 2.0;
    }

    // Machine readings, newest first, capped
    w.heading("Machine Readings (latest)", &bold);
    for reading in readings.iter().take(max_history_rows) {
        w.ensure_space(10.0);
        w.text_at(
            &format!(
                "{} - {}",
                reading.reading_date.format("%b %d, %Y %H:%M"),
                name_of(reading.equipment_id)
            ),
            9.0,
            LEFT_MARGIN_MM,
            &regular,
        );
        w.y -= 4.5;
        w.text_at(
            &format!(
                "Hours: {:.1} - Temp: {} - Pressure: {} - Vibration: {}",
                reading.operating_hours,
                fmt_opt(reading.temperature),
                fmt_opt(reading.pressure),
                fmt_opt(reading.vibration),
            ),
            9.0,
            LEFT_MARGIN_MM + 4.0,
            &regular,
        );
        w.y -= 6.0;
    }

    // Summary grouped on each equipment's stored status
    let count_with = |status: MaintenanceStatus| {
        equipment
            .iter()
            .filter(|e| MaintenanceStatus::from(e.maintenance_status) == status)
            .count()
    };
    w.heading("Summary", &bold);
    w.line(&format!("Total Equipment: {}", equipment.len()), 10.0, &regular);
    w.line(
        &format!("Healthy (OK): {}", count_with(MaintenanceStatus::Ok)),
        10.0,
        &regular,
    );
    w.line(
        &format!("Due Soon: {}", count_with(MaintenanceStatus::DueSoon)),
        10.0,
        &regular,
    );
    w.line(
        &format!("Overdue: {}", count_with(MaintenanceStatus::Overdue)),
        10.0,
        &regular,
    );
    w.line(
        &format!("Unknown: {}", count_with(MaintenanceStatus::Unknown)),
        10.0,
        &regular,
    );

    w.finish()
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;

    fn equipment(name: &str, status: MaintenanceStatus) -> Equipment {
        Equipment {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: 3,
            serial_number: format!("SN-{}", name),
            location: None,
            manufacturer: None,
            installation_date: None,
            state: 0,
            operating_hours: 120.0,
            criticality: 1,
            notes: None,
            maintenance_interval_days: 30,
            last_maintenance_date: None,
            next_maintenance_due: NaiveDate::from_ymd_opt(2025, 2, 1),
            maintenance_status: i16::from(status),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn renders_a_nonempty_pdf() {
        let eq = equipment("Press #1", MaintenanceStatus::Ok);
        let log = MaintenanceLog {
            id: Uuid::new_v4(),
            equipment_id: eq.id,
            performed_by: "J. Doe".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            notes: "Replaced belt".to_string(),
            parts_used: Json(vec![crate::models::PartUsed {
                part_name: "Drive belt".to_string(),
                quantity: 1,
                cost: 42.5,
            }]),
            created_at: Utc::now(),
        };

        let bytes = render_report(&[eq], &[log], &[], Utc::now(), 200).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn many_rows_overflow_onto_extra_pages() {
        let rows: Vec<Equipment> = (0..120)
            .map(|i| equipment(&format!("Machine #{}", i), MaintenanceStatus::Ok))
            .collect();
        let bytes = render_report(&rows, &[], &[], Utc::now(), 200).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
