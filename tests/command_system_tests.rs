// =====================================================
// FILE: tests/command_system_tests.rs
// =====================================================

use energy_dash_locale::{
    create_default_registry, CommandHandler, CommandOutput, LanguageCode, LanguageStore, MemoryBackend,
    TransitionTiming, TranslationTable,
};
use std::sync::Arc;

async fn handler_with(backend: &Arc<MemoryBackend>) -> CommandHandler {
    let store = LanguageStore::bootstrap(
        backend.clone(),
        TranslationTable::embedded().unwrap(),
        TransitionTiming::default(),
    )
    .await;
    CommandHandler::new(store)
}

#[test]
fn test_registry() {
    let registry = create_default_registry();
    assert_eq!(registry.len(), 4);
    assert!(registry.find_command("lang").is_some());
    assert!(registry.find_command("language").is_some());
    assert!(registry.find_command("translate").is_some());
    assert!(registry.find_command("q").is_some());
    assert!(registry.find_command("nope").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_lang_without_args_shows_status() {
    let handler = handler_with(&Arc::new(MemoryBackend::new())).await;

    let result = handler.handle_input("lang").await;
    assert!(result.success);
    assert!(result.message.contains("Aktif dil: tr"));
    assert!(result.message.contains("en (English)"));
    assert!(!handler.store().is_changing_language());
}

#[tokio::test(start_paused = true)]
async fn test_lang_starts_transition() {
    let handler = handler_with(&Arc::new(MemoryBackend::new())).await;

    let result = handler.handle_input("lang en").await;
    assert!(result.success);
    assert!(!result.should_exit);
    assert!(handler.store().is_changing_language());

    let status = handler.handle_input("status").await;
    assert!(status.message.contains("pre-swap"), "{}", status.message);
}

#[tokio::test(start_paused = true)]
async fn test_lang_rejects_unknown_code() {
    let handler = handler_with(&Arc::new(MemoryBackend::new())).await;

    let result = handler.handle_input("lang xx").await;
    assert!(result.success);
    assert_eq!(result.message, "Geçersiz dil: xx");
    assert!(!handler.store().is_changing_language());
}

#[tokio::test(start_paused = true)]
async fn test_translate_command() {
    let handler = handler_with(&Arc::new(MemoryBackend::new())).await;

    assert_eq!(handler.handle_input("t nav.reports").await.message, "Raporlar");
    assert_eq!(
        handler.handle_input("t usage.change 12").await.message,
        "Geçen aya göre 12%"
    );
    assert_eq!(handler.handle_input("t missing.key").await.message, "missing.key");
    assert_eq!(
        handler.handle_input("t").await.message,
        "Kullanım: t <anahtar> [parametreler...]"
    );
}

#[tokio::test(start_paused = true)]
async fn test_unknown_and_empty_input() {
    let handler = handler_with(&Arc::new(MemoryBackend::new())).await;

    let unknown = handler.handle_input("unknown_xyz").await;
    assert!(!unknown.success);
    assert_eq!(unknown.message, "Bilinmeyen komut: unknown_xyz");

    let empty = handler.handle_input("   ").await;
    assert!(!empty.success);
    assert!(empty.message.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_help_lists_commands() {
    let handler = handler_with(&Arc::new(MemoryBackend::new())).await;

    let help = handler.handle_input("help").await;
    assert!(help.success);
    for (name, _) in handler.list_commands() {
        assert!(help.message.contains(name));
    }
}

#[tokio::test(start_paused = true)]
async fn test_exit_waits_for_commit() {
    let backend = Arc::new(MemoryBackend::new());
    let handler = handler_with(&backend).await;

    handler.handle_input("lang en").await;
    let result = handler.handle_input("exit").await;

    assert!(result.should_exit);
    assert_eq!(result.message, "Exiting");
    assert!(!handler.store().is_changing_language());
    assert_eq!(backend.saves(), vec![LanguageCode::En]);
}

#[tokio::test(start_paused = true)]
async fn test_exit_marker_in_output_does_not_exit() {
    let handler = handler_with(&Arc::new(MemoryBackend::new())).await;

    let result = handler.handle_input("t __EXIT__boom").await;
    assert!(result.success);
    assert!(!result.should_exit);
    assert_eq!(result.message, "__EXIT__boom");
}

#[tokio::test(start_paused = true)]
async fn test_registry_exit_output_is_typed() {
    let backend = Arc::new(MemoryBackend::new());
    let handler = handler_with(&backend).await;
    let registry = create_default_registry();

    let output = registry
        .execute(handler.store(), "exit", &[])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(output, CommandOutput::Exit("Çıkılıyor".to_string()));

    let output = registry
        .execute(handler.store(), "t", &["nav.alerts"])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(output, CommandOutput::Message("Uyarılar".to_string()));
}
