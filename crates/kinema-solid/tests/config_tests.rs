// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
use kinema_math::codec::DEFAULT_PRECISION;
use kinema_solid::config::KERNEL_CONFIG_KEY;
use kinema_solid::{
    ConfigError, ConfigService, ConfigStore, FsConfigStore, Integrator, KernelConfig,
    MemoryConfigStore,
};

#[test]
fn defaults() {
    let cfg = KernelConfig::default();
    assert_eq!(cfg.time_step, 1.0e-4);
    assert_eq!(cfg.integrator, Integrator::SemiImplicitEuler);
    assert_eq!(cfg.codec_precision, DEFAULT_PRECISION);
    assert_eq!(cfg.dt::<f32>(), 1.0e-4_f32);
    assert_eq!(cfg.codec().precision(), DEFAULT_PRECISION);
    assert!(cfg.validate().is_ok());
}

#[test]
fn missing_fields_take_defaults() {
    let cfg: KernelConfig = serde_json::from_str(r#"{ "integrator": "midpoint" }"#).expect("json");
    assert_eq!(cfg.integrator, Integrator::Midpoint);
    assert_eq!(cfg.time_step, KernelConfig::default().time_step);
    assert_eq!(cfg.codec_precision, DEFAULT_PRECISION);

    let empty: KernelConfig = serde_json::from_str("{}").expect("json");
    assert_eq!(empty, KernelConfig::default());
}

#[test]
fn integrator_names_are_snake_case() {
    let json = serde_json::to_string(&Integrator::SemiImplicitEuler).expect("json");
    assert_eq!(json, r#""semi_implicit_euler""#);
    assert!(serde_json::from_str::<Integrator>(r#""runge_kutta""#).is_err());
}

#[test]
fn memory_store_round_trip() {
    let service = ConfigService::new(MemoryConfigStore::new());
    assert_eq!(service.load_kernel().expect("defaults"), KernelConfig::default());

    let cfg = KernelConfig {
        time_step: 0.01,
        integrator: Integrator::Midpoint,
        codec_precision: 15,
    };
    service.save_kernel(&cfg).expect("save");
    assert_eq!(service.load_kernel().expect("load"), cfg);
    assert_eq!(service.load::<KernelConfig>(KERNEL_CONFIG_KEY).expect("load"), Some(cfg));
    assert_eq!(service.load::<KernelConfig>("other").expect("load"), None);
}

#[test]
fn invalid_values_are_rejected() {
    let service = ConfigService::new(MemoryConfigStore::new());
    let bad = KernelConfig {
        time_step: 0.0,
        ..KernelConfig::default()
    };
    assert!(matches!(service.save_kernel(&bad), Err(ConfigError::Invalid(_))));

    // Written behind the service's back.
    let store = service.into_inner();
    store
        .save_raw(KERNEL_CONFIG_KEY, br#"{ "time_step": -1.0 }"#)
        .expect("raw save");
    let service = ConfigService::new(store);
    assert!(matches!(service.load_kernel(), Err(ConfigError::Invalid(_))));

    let precision = KernelConfig {
        codec_precision: 1000,
        ..KernelConfig::default()
    };
    assert!(matches!(precision.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let store = MemoryConfigStore::new();
    store.save_raw(KERNEL_CONFIG_KEY, b"{ not json").expect("raw save");
    let service = ConfigService::new(store);
    assert!(matches!(service.load_kernel(), Err(ConfigError::Serde(_))));
}

#[test]
fn memory_store_reports_missing_keys() {
    let store = MemoryConfigStore::new();
    assert!(matches!(store.load_raw("absent"), Err(ConfigError::NotFound)));
    store.save_raw("empty", b"").expect("raw save");
    let service = ConfigService::new(store);
    assert_eq!(service.load::<KernelConfig>("empty").expect("load"), None);
}

#[test]
fn fs_store_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("nested").join("config");
    let store = FsConfigStore::new(&root).expect("store");
    assert_eq!(store.base(), root.as_path());
    assert!(root.is_dir());
    assert!(matches!(store.load_raw(KERNEL_CONFIG_KEY), Err(ConfigError::NotFound)));

    let service = ConfigService::new(store);
    let cfg = KernelConfig {
        integrator: Integrator::Midpoint,
        ..KernelConfig::default()
    };
    service.save_kernel(&cfg).expect("save");
    assert!(root.join("kernel.json").is_file());

    let reopened = ConfigService::new(FsConfigStore::new(&root).expect("store"));
    assert_eq!(reopened.load_kernel().expect("load"), cfg);
}
