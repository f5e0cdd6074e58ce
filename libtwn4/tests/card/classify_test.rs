#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use libtwn4::card::{ChipSubType, IdentificationEvidence, SAK_RULES, classify};

#[test]
fn classification_is_deterministic() {
    let ev = IdentificationEvidence::with_sak(0x20)
        .ats(plain_ats())
        .version(get_version_reply(0x01, 0x03, 0x1C));
    let first = classify(&ev);
    assert_eq!(first, Some(ChipSubType::DesfireEv3_16K));
    for _ in 0..10 {
        assert_eq!(classify(&ev), first);
    }
}

#[test]
fn every_rule_matches_its_own_value() {
    // a SAK equal to a rule's value hits that rule or an earlier one
    for (i, rule) in SAK_RULES.iter().enumerate() {
        let hit = SAK_RULES.iter().position(|r| r.matches(rule.value));
        assert!(hit.is_some_and(|h| h <= i), "rule {} ({})", i, rule.name);
    }
}

#[test]
fn mifare_mini_and_2k() {
    assert_eq!(classify(&IdentificationEvidence::with_sak(0x09)), Some(ChipSubType::MifareMini));
    assert_eq!(classify(&IdentificationEvidence::with_sak(0x19)), Some(ChipSubType::Mifare2K));
}

#[test]
fn plus_sl2() {
    assert_eq!(
        classify(&IdentificationEvidence::with_sak(0x10)),
        Some(ChipSubType::MifarePlusSl2_2K)
    );
    assert_eq!(
        classify(&IdentificationEvidence::with_sak(0x11)),
        Some(ChipSubType::MifarePlusSl2_4K)
    );
}

#[test]
fn layer4_usable_ats_without_signature_is_unspecified() {
    let ev = IdentificationEvidence::with_sak(0x20).ats(plain_ats());
    assert_eq!(classify(&ev), Some(ChipSubType::Unspecified));
}

#[test]
fn layer4_no_ats_is_smartmx_4k() {
    assert_eq!(
        classify(&IdentificationEvidence::with_sak(0x20)),
        Some(ChipSubType::SmartMxMifare4K)
    );
}

#[test]
fn unknown_version_product_is_coarse() {
    let ev = IdentificationEvidence::with_sak(0x20).version(get_version_reply(0x04, 0x01, 0x18));
    assert_eq!(classify(&ev), None);
}

#[test]
fn sak_18_takes_the_4k_path() {
    let plain = IdentificationEvidence::with_sak(0x18);
    assert_eq!(classify(&plain), Some(ChipSubType::Mifare4K));
    let plus_s = IdentificationEvidence::with_sak(0x18).ats(plus_s_ats());
    assert_eq!(classify(&plus_s), Some(ChipSubType::MifarePlusSl1_4K));
}

#[test]
fn sak_08_takes_the_1k_2k_path() {
    let plain = IdentificationEvidence::with_sak(0x08);
    assert_eq!(classify(&plain), Some(ChipSubType::Mifare1K));
    let plus_s = IdentificationEvidence::with_sak(0x08).ats(plus_s_ats());
    assert_eq!(classify(&plus_s), Some(ChipSubType::MifarePlusSl1_2K));
}
