use super::attr::bitfield_be;
use super::{resolve, Attr, Cpu, Flags, Group, Proc, Target};
use crate::error::ErrorKind;
use crate::event::{lookup, names, Domain};

#[test]
fn test_attr_size() {
    assert_eq!(Attr::SIZE, 112);
}

#[test]
fn test_resolve_cpu_cycles() {
    let attr = resolve("cpu-cycles").unwrap();
    assert_eq!(attr.ty, Domain::Hardware.as_raw());
    assert_eq!(attr.config, 0);
    assert_eq!(attr.flags.bits(), 0b110_0001);
    assert!(attr.flags.contains(Flags::DISABLED));
    assert!(attr.flags.contains(Flags::EXCLUDE_KERNEL));
    assert!(attr.flags.contains(Flags::EXCLUDE_HV));
}

#[test]
fn test_resolve_all_registered() {
    for name in names() {
        let attr = resolve(name).unwrap();
        let desc = lookup(name).unwrap();
        assert_eq!(attr.size as usize, Attr::SIZE, "{}", name);
        assert_eq!(attr.size as usize, attr.to_bytes().as_bytes().len(), "{}", name);
        assert_eq!(attr.flags, Attr::DEFAULT_FLAGS, "{}", name);
        assert_eq!(attr.ty, desc.domain.as_raw(), "{}", name);
        assert_eq!(attr.config, desc.code, "{}", name);

        let rest = Attr {
            ty: 0,
            size: 0,
            config: 0,
            flags: Flags::empty(),
            ..attr
        };
        assert_eq!(rest, Attr::default(), "{}", name);
    }
}

#[test]
fn test_resolve_unknown() {
    let err = resolve("not-an-event").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotSupported);
}

#[test]
fn test_to_bytes_layout() {
    let attr = Attr {
        ty: 1,
        config: 0x0102_0304_0506_0708,
        wakeup_events: 0xaabb_ccdd,
        config2: 0x1122_3344_5566_7788,
        sample_stack_user: 0x55,
        clockid: -1,
        sample_regs_intr: 0xdead_beef_0000_0001,
        aux_watermark: 7,
        reserved: 0x99,
        ..resolve("task-clock").unwrap()
    };
    let bytes = attr.to_bytes();
    let bytes = bytes.as_bytes();

    let u32_at = |at: usize| u32::from_ne_bytes(bytes[at..at + 4].try_into().unwrap());
    let u64_at = |at: usize| u64::from_ne_bytes(bytes[at..at + 8].try_into().unwrap());

    assert_eq!(u32_at(0), 1);
    assert_eq!(u32_at(4), 112);
    assert_eq!(u64_at(8), 0x0102_0304_0506_0708);
    assert_eq!(u64_at(16), 0);
    assert_eq!(u64_at(24), 0);
    assert_eq!(u64_at(32), 0);
    assert_eq!(u32_at(48), 0xaabb_ccdd);
    assert_eq!(u32_at(52), 0);
    assert_eq!(u64_at(64), 0x1122_3344_5566_7788);
    assert_eq!(u32_at(88), 0x55);
    assert_eq!(i32::from_ne_bytes(bytes[92..96].try_into().unwrap()), -1);
    assert_eq!(u64_at(96), 0xdead_beef_0000_0001);
    assert_eq!(u32_at(104), 7);
    assert_eq!(u32_at(108), 0x99);

    #[cfg(target_endian = "little")]
    assert_eq!(u64_at(40), 0b110_0001);
}

#[test]
fn test_to_bytes_zeroed() {
    let bytes = Attr::default().to_bytes();
    assert!(bytes.as_bytes().iter().all(|b| *b == 0));
}

#[test]
fn test_flags() {
    let mut flags = Flags::DISABLED | Flags::INHERIT;
    assert_eq!(flags.bits(), 0b11);
    flags.remove(Flags::DISABLED);
    assert!(!flags.contains(Flags::DISABLED));
    flags.insert(Flags::CONTEXT_SWITCH);
    assert_eq!(flags.bits(), (1 << 1) | (1 << 26));
    assert_eq!(Flags::RESERVED_1.bits(), 1 << 27);
    assert_eq!(format!("{:?}", Attr::DEFAULT_FLAGS), r#"{DISABLED, EXCLUDE_KERNEL, EXCLUDE_HV}"#);
}

#[test]
fn test_target() {
    assert_eq!(Target::default(), Target::new(0, -1, -1, 0));
    assert_eq!(Target::from((Proc::CURRENT, Cpu::ALL)), Target::CURRENT);
    assert_eq!(Target::from((Cpu(3), Proc(42))), Target::new(42, 3, -1, 0));
    assert_eq!(Target::from((Proc::ALL, Cpu(1))), Target::new(-1, 1, -1, 0));

    let target = Target::CURRENT.group(Group(9)).flags(8);
    assert_eq!(target.group_fd(), 9);
    assert_eq!(target, Target::new(0, -1, 9, 8));
}

#[test]
fn test_bitfield_be() {
    assert_eq!(bitfield_be(Flags::DISABLED.bits()), 1 << 63);
    assert_eq!(bitfield_be(Flags::EXCLUDE_KERNEL.bits()), 1 << 58);
    assert_eq!(bitfield_be(Flags::RESERVED_1.bits()), 1 << 36);

    // `precise_ip` is a 2-bit field at bits 47-48, value order is kept.
    assert_eq!(bitfield_be(Flags::PRECISE_IP_1.bits()), 1 << 47);
    assert_eq!(bitfield_be(Flags::PRECISE_IP_2.bits()), 1 << 48);
    let ip3 = Flags::PRECISE_IP_1 | Flags::PRECISE_IP_2;
    assert_eq!(bitfield_be(ip3.bits()), 0b11 << 47);

    // Neighbours of `precise_ip` are not disturbed.
    let flags = Flags::WATERMARK | Flags::PRECISE_IP_1 | Flags::MMAP_DATA;
    assert_eq!(bitfield_be(flags.bits()), (1 << 49) | (1 << 47) | (1 << 46));
}

#[test]
fn test_flags_to_abi() {
    let flags = Attr::DEFAULT_FLAGS | Flags::PRECISE_IP_1;
    let bytes = Attr {
        flags,
        ..Default::default()
    }
    .to_bytes();
    let word = u64::from_ne_bytes(bytes.as_bytes()[40..48].try_into().unwrap());
    if cfg!(target_endian = "big") {
        assert_eq!(word, bitfield_be(flags.bits()));
    } else {
        assert_eq!(word, flags.bits());
    }
}
