#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary TOML must either be rejected or yield a catalog that renders without panicking.
    let Ok(cfg) = reminder_config::load_toml(data) else {
        return;
    };
    if cfg.validate().is_err() {
        return;
    }
    let Ok(catalog) = reminder_core::SlotCatalog::try_from(&cfg) else {
        return;
    };
    for slot in catalog.iter() {
        let _ = catalog.render(slot, Some("dose"));
    }
});
