use std::cmp::Ordering;

use mbdf_portal::forum::collation::compare_tr;

fn sorted(words: &[&str]) -> Vec<String> {
    let mut v: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
    v.sort_by(|a, b| compare_tr(a, b));
    v
}

#[test]
fn test_turkish_letters_follow_their_base_letter() {
    let out = sorted(&["zebra", "çay", "cam", "dere", "ğ", "gül", "hak", "şeker", "sarı", "tuz"]);

    assert_eq!(
        out,
        vec!["cam", "çay", "dere", "gül", "ğ", "hak", "sarı", "şeker", "tuz", "zebra"]
    );
}

#[test]
fn test_vowels_with_diaeresis() {
    let out = sorted(&["Ürün", "Uyum", "Öneri", "Ozon", "Pazar"]);

    assert_eq!(out, vec!["Ozon", "Öneri", "Pazar", "Uyum", "Ürün"]);
}

#[test]
fn test_not_byte_order() {
    // Raw byte order would place "Çevre" after "Zemin".
    assert_eq!(compare_tr("Çevre", "Zemin"), Ordering::Less);
    assert_eq!("Çevre".cmp("Zemin"), Ordering::Greater);
}

#[test]
fn test_case_is_a_tertiary_difference() {
    assert_eq!(compare_tr("anket", "Anket"), Ordering::Less);
    assert_eq!(compare_tr("Anket", "bütçe"), Ordering::Less);
}

#[test]
fn test_digits_and_spaces_before_letters() {
    assert_eq!(compare_tr("2024 Rapor", "Anket"), Ordering::Less);
    assert_eq!(compare_tr("A b", "Ab"), Ordering::Less);
    assert_eq!(compare_tr("Rapor 2", "Rapor 10"), Ordering::Greater);
}

#[test]
fn test_prefix_sorts_first() {
    assert_eq!(compare_tr("Rapor", "Raporlar"), Ordering::Less);
}

#[test]
fn test_equal_only_for_identical_strings() {
    assert_eq!(compare_tr("Genel", "Genel"), Ordering::Equal);
    assert_ne!(compare_tr("Genel", "genel"), Ordering::Equal);
}

#[test]
fn test_accented_letters_sort_with_their_base_letter() {
    let out = sorted(&["Zehra", "Émile", "Ağırlık", "Ärzte"]);

    assert_eq!(out, vec!["Ağırlık", "Ärzte", "Émile", "Zehra"]);
}

#[test]
fn test_accents_only_break_ties() {
    assert_eq!(compare_tr("resume", "résumé"), Ordering::Less);
    assert_eq!(compare_tr("résumé", "resumes"), Ordering::Less);
    assert_eq!(compare_tr("Ñandu", "Nz"), Ordering::Less);
}

#[test]
fn test_turkish_letters_stay_distinct_from_accents() {
    // "ö" is its own letter, "ó" is an accented "o".
    let out = sorted(&["öz", "óz", "oz", "pa"]);

    assert_eq!(out, vec!["oz", "óz", "öz", "pa"]);
}

#[test]
fn test_sharp_s_expands() {
    assert_eq!(compare_tr("Straße", "Strasse"), Ordering::Greater);
    assert_eq!(compare_tr("Straße", "Strast"), Ordering::Less);
}
