mod reload;

pub use reload::ReloadRebindingConfigUseCase;
