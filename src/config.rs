// configuration du déploiement

use std::env;

/// Récupère le host d'écoute depuis les variables d'environnement (défaut: 127.0.0.1)
pub fn server_host() -> String {
    env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
}

/// Récupère le port d'écoute depuis les variables d'environnement (défaut: 8080)
pub fn server_port() -> u16 {
    match env::var("SERVER_PORT") {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            eprintln!("⚠️  WARNING: invalid SERVER_PORT '{}', using default 8080", value);
            8080
        }),
        Err(_) => 8080,
    }
}

/// Nombre de workers du serveur (None = laisser actix-web décider)
pub fn server_workers() -> Option<usize> {
    let value = env::var("SERVER_WORKERS").ok()?;
    match value.parse::<usize>() {
        Ok(workers) if workers > 0 => Some(workers),
        _ => {
            eprintln!("⚠️  WARNING: invalid SERVER_WORKERS '{}', ignoring", value);
            None
        }
    }
}
