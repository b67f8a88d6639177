//! Dispatch behavior with the gate off.
//!
//! Nothing in this binary ever calls `gate::enable`, so the gate keeps its
//! default (off) for the whole process and every dispatch call must behave as
//! if no commands were attached at all.

use debugtap::{Context, Error, Payload, custom, gate, tap, wrap};
use std::cell::Cell;

#[test]
fn gate_defaults_to_off() {
    assert!(!gate::enabled());
}

#[test]
fn wrap_always_runs_production() {
    let ctx = Context::new().attach("svc.endpoint.1", Payload::new(42_u32));

    let got: u32 = wrap(&ctx, "svc.endpoint.1", || Ok::<_, Error>(7)).unwrap();
    assert_eq!(got, 7);
}

#[test]
fn wrap_ignores_even_mistyped_payloads() {
    // with the gate off a wrong payload type must not surface as an error
    let ctx = Context::new().attach("svc.port", Payload::new("oops".to_string()));

    let got: u32 = wrap(&ctx, "svc.port", || Ok::<_, Error>(7)).unwrap();
    assert_eq!(got, 7);
}

#[test]
fn tap_never_invokes_the_handler() {
    let ctx = Context::new().attach("svc.count", Payload::new(()));

    let ran = Cell::new(false);
    tap(&ctx, "svc.count", |_| {
        ran.set(true);
        Ok::<_, Error>(())
    })
    .unwrap();

    assert!(!ran.get());
}

#[test]
fn custom_always_takes_the_production_path() {
    let ctx = Context::new().attach("svc.branch", Payload::new(()));

    let (production_ran, override_ran) = (Cell::new(false), Cell::new(false));
    custom(
        &ctx,
        "svc.branch",
        || {
            production_ran.set(true);
            Ok::<_, Error>(())
        },
        |_| {
            override_ran.set(true);
            Ok(())
        },
    )
    .unwrap();

    assert!(production_ran.get());
    assert!(!override_ran.get());
}
