//! Message producers for each supported language.
//!
//! All responses are plain text. The issue title sent to the tracker is
//! deliberately not part of this catalog — it is never localized.

use super::Lang;

impl Lang {
    #[must_use]
    pub const fn method_not_allowed(self) -> &'static str {
        match self {
            Self::En => "Only POST allowed",
            Self::Pt => "Apenas POST é permitido",
            Self::Es => "Solo se permite POST",
            Self::De => "Nur POST ist erlaubt",
        }
    }

    #[must_use]
    pub const fn missing_fields(self) -> &'static str {
        match self {
            Self::En => "Missing required fields: description and contact",
            Self::Pt => "Campos obrigatórios em falta: description e contact",
            Self::Es => "Faltan campos obligatorios: description y contact",
            Self::De => "Pflichtfelder fehlen: description und contact",
        }
    }

    #[must_use]
    pub const fn success(self) -> &'static str {
        match self {
            Self::En => "Bug report submitted. Thank you!",
            Self::Pt => "Relatório de erro submetido. Obrigado!",
            Self::Es => "Informe de error enviado. ¡Gracias!",
            Self::De => "Fehlerbericht übermittelt. Vielen Dank!",
        }
    }

    #[must_use]
    pub fn rate_limited(self, wait_secs: u64) -> String {
        match self {
            Self::En => format!("Too many submissions. Try again in {wait_secs} seconds"),
            Self::Pt => format!("Demasiadas submissões. Tente novamente dentro de {wait_secs} segundos"),
            Self::Es => format!("Demasiados envíos. Inténtelo de nuevo en {wait_secs} segundos"),
            Self::De => format!("Zu viele Übermittlungen. Bitte in {wait_secs} Sekunden erneut versuchen"),
        }
    }

    #[must_use]
    pub fn tracker_error(self, status: u16, body: &str) -> String {
        match self {
            Self::En => format!("Issue creation failed (status {status}): {body}"),
            Self::Pt => format!("A criação do registo falhou (estado {status}): {body}"),
            Self::Es => format!("La creación del informe falló (estado {status}): {body}"),
            Self::De => format!("Anlegen des Berichts fehlgeschlagen (Status {status}): {body}"),
        }
    }

    #[must_use]
    pub fn internal_error(self, detail: &str) -> String {
        match self {
            Self::En => format!("Internal error: {detail}"),
            Self::Pt => format!("Erro interno: {detail}"),
            Self::Es => format!("Error interno: {detail}"),
            Self::De => format!("Interner Fehler: {detail}"),
        }
    }
}
