//! CSV export for admin tables

use super::models::{ActivityEntry, Domain, Payment, Plan, format_cents};
use super::table::format_datetime;

/// A row that can be written as CSV
pub trait CsvRecord {
    fn headers() -> &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

/// Quote a field if it contains a separator, quote or line break
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Header line plus one line per record, `\n` terminated
pub fn to_csv<T: CsvRecord>(records: &[T]) -> String {
    let mut out = String::new();
    push_line(&mut out, T::headers().iter().map(|h| h.to_string()));
    for record in records {
        push_line(&mut out, record.fields());
    }
    out
}

fn push_line(out: &mut String, fields: impl IntoIterator<Item = String>) {
    let line: Vec<String> = fields.into_iter().map(|f| escape_field(&f)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

impl CsvRecord for Plan {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "monthly_price", "yearly_price", "max_students", "active", "features"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            format_cents(self.monthly_price_cents),
            format_cents(self.yearly_price_cents()),
            self.student_limit_label(),
            self.is_active.to_string(),
            self.features.join("; "),
        ]
    }
}

impl CsvRecord for Domain {
    fn headers() -> &'static [&'static str] {
        &["id", "tenant", "hostname", "kind", "dns", "ssl", "added_at"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.tenant_id.clone(),
            self.hostname.clone(),
            self.kind.to_string(),
            self.dns.to_string(),
            self.ssl.to_string(),
            format_datetime(&self.added_at),
        ]
    }
}

impl CsvRecord for Payment {
    fn headers() -> &'static [&'static str] {
        &["invoice", "tenant", "amount", "currency", "status", "method", "attempts", "created_at"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.invoice.clone(),
            self.tenant_id.clone(),
            format_cents(self.amount_cents),
            self.currency.clone(),
            self.status.to_string(),
            self.method.to_string(),
            self.attempts.to_string(),
            format_datetime(&self.created_at),
        ]
    }
}

impl CsvRecord for ActivityEntry {
    fn headers() -> &'static [&'static str] {
        &["id", "time", "actor", "category", "message"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format_datetime(&self.at),
            self.actor.clone(),
            self.category.to_string(),
            self.message.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::admin::models::ActivityCategory;
    use chrono::DateTime;

    #[test]
    fn test_plain_field_untouched() {
        assert_eq!(escape_field("riverside"), "riverside");
    }

    #[test]
    fn test_comma_and_quote_escaped() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_activity_export() {
        let entries = vec![ActivityEntry {
            id: 7,
            at: DateTime::from_timestamp(1_735_689_600, 0).unwrap(),
            actor: "admin@campusly.app".to_string(),
            category: ActivityCategory::Plan,
            message: "Created plan \"Pro, yearly\"".to_string(),
        }];

        let csv = to_csv(&entries);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "id,time,actor,category,message");
        assert_eq!(
            lines[1],
            "7,2025-01-01 00:00,admin@campusly.app,plan,\"Created plan \"\"Pro, yearly\"\"\""
        );
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let csv = to_csv::<Payment>(&[]);
        assert_eq!(
            csv,
            "invoice,tenant,amount,currency,status,method,attempts,created_at\n"
        );
    }
}
