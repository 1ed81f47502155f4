use std::fmt::Display;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use crate::models::common::RecordId;
use crate::models::imss::QueryType;

/// Qué bitácora se consulta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogScope {
    /// Todas las consultas (admin)
    All,
    /// Solo las del usuario en sesión
    Mine,
}

impl LogScope {
    pub fn path(&self) -> &'static str {
        match self {
            LogScope::All => "/logs",
            LogScope::Mine => "/logs/me",
        }
    }
}

/// Entrada de la bitácora de consultas (inmutable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub query_type: String,
    pub curp: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl LogEntry {
    pub fn kind(&self) -> Option<QueryType> {
        self.query_type.parse().ok()
    }

    /// Etiqueta legible del tipo; si el backend manda un tipo nuevo se muestra tal cual
    pub fn type_label(&self) -> String {
        self.kind()
            .map(|k| k.label().to_string())
            .unwrap_or_else(|| self.query_type.clone())
    }

    /// Fecha en hora local del navegador
    pub fn created_at_display(&self) -> String {
        format_timestamp(&self.created_at, &Local)
    }
}

/// `dd/mm/yyyy HH:MM` en la zona indicada; el texto crudo si no es RFC 3339
pub fn format_timestamp<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(tz).format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
