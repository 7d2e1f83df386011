use super::hw::Hardware;
use super::{lookup, names, Domain, Event, REGISTRY};
use crate::error::ErrorKind;

#[test]
fn test_lookup_cpu_cycles() {
    let desc = lookup("cpu-cycles").unwrap();
    assert_eq!(desc.name, "cpu-cycles");
    assert_eq!(desc.domain, Domain::Hardware);
    assert_eq!(desc.code, Hardware::CpuCycle.code());
    assert_eq!(desc.code, 0);
}

#[test]
fn test_lookup_generic_hardware_codes() {
    let expected = [
        ("cpu-cycles", 0),
        ("instructions", 1),
        ("cache-references", 2),
        ("cache-misses", 3),
        ("branch-instructions", 4),
        ("branch-misses", 5),
        ("bus-cycles", 6),
    ];
    for (name, code) in expected {
        let desc = lookup(name).unwrap();
        assert_eq!(desc.domain, Domain::Hardware, "{}", name);
        assert_eq!(desc.code, code, "{}", name);
    }
}

#[test]
fn test_lookup_software() {
    let desc = lookup("context-switches").unwrap();
    assert_eq!(desc.domain, Domain::Software);
    assert_eq!(desc.code, 3);
}

#[test]
fn test_lookup_alias() {
    assert_eq!(lookup("cycles").unwrap().code, lookup("cpu-cycles").unwrap().code);
    assert_eq!(
        lookup("branches").unwrap().code,
        lookup("branch-instructions").unwrap().code
    );
}

#[test]
fn test_lookup_unknown() {
    for name in ["", "CPU-CYCLES", "cpu_cycles", "instructions ", "l1d-misses"] {
        let err = lookup(name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotSupported);
    }
}

#[test]
fn test_registry_matches_names() {
    assert_eq!(REGISTRY.len(), names().count());
    for name in names() {
        assert_eq!(lookup(name).unwrap().name, name);
    }
}

#[test]
fn test_event_domain() {
    assert_eq!(Event::from(Hardware::BusCycle).domain().as_raw(), 0);
    assert_eq!(
        Event::from(super::sw::Software::TaskClock).domain().as_raw(),
        1
    );
}
