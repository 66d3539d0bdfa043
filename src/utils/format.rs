// src/utils/format.rs
//! Funções de formatação para exibição

/// Formata número genérico com sufixo K/M
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}

/// Formata duração em segundos para formato legível
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let whole = secs as u64;
        format!("{}m{}s", whole / 60, whole % 60)
    } else {
        format!("{:.2}s", secs)
    }
}
