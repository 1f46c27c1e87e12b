use super::*;
use crate::style::fonts::FONT_CATALOG;

#[test]
fn empty_store_reports_font_error() {
    let store = FontStore::empty();
    assert_eq!(store.face_count(), 0);
    let err = store.resolve(&FONT_CATALOG[0]).unwrap_err();
    assert!(err.to_string().starts_with("font error:"));
}

#[test]
fn missing_directory_loads_nothing() {
    let mut store = FontStore::empty();
    let dir = std::env::temp_dir().join("arcbanner-no-such-fonts-dir");
    assert_eq!(store.load_dir(&dir), 0);
}

#[test]
fn directory_loader_ignores_non_font_files() {
    let dir = std::env::temp_dir().join(format!("arcbanner-fonts-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("notes.txt"), b"not a font").unwrap();

    let mut store = FontStore::empty();
    assert_eq!(store.load_dir(&dir), 0);
    assert_eq!(store.face_count(), 0);

    std::fs::remove_dir_all(&dir).unwrap();
}

fn families(names: &[(&str, bool)]) -> Vec<(String, bool)> {
    names.iter().map(|(n, m)| (n.to_string(), *m)).collect()
}

#[test]
fn generics_pick_well_known_linux_families() {
    let installed = families(&[
        ("DejaVu Math TeX Gyre", false),
        ("DejaVu Sans", false),
        ("DejaVu Sans Mono", true),
        ("DejaVu Serif", false),
    ]);
    let pick = |g| pick_generic_family(g, &installed);
    assert_eq!(pick(GenericFamily::SansSerif).as_deref(), Some("DejaVu Sans"));
    assert_eq!(pick(GenericFamily::Serif).as_deref(), Some("DejaVu Serif"));
    assert_eq!(pick(GenericFamily::Monospace).as_deref(), Some("DejaVu Sans Mono"));
    assert_eq!(pick(GenericFamily::Cursive).as_deref(), Some("DejaVu Sans"));
    assert_eq!(pick(GenericFamily::Fantasy).as_deref(), Some("DejaVu Serif"));
}

#[test]
fn generics_fall_back_to_family_names_and_skip_math_faces() {
    let installed = families(&[
        ("Acme Math Serif", false),
        ("Fira Code", true),
        ("Source Sans 3", false),
        ("Source Serif 4", false),
    ]);
    let pick = |g| pick_generic_family(g, &installed);
    assert_eq!(pick(GenericFamily::SansSerif).as_deref(), Some("Source Sans 3"));
    assert_eq!(pick(GenericFamily::Serif).as_deref(), Some("Source Serif 4"));
    assert_eq!(pick(GenericFamily::Monospace).as_deref(), Some("Fira Code"));
}

#[test]
fn generics_stay_unset_without_matching_faces() {
    let installed = families(&[("Acme Math", false)]);
    assert!(pick_generic_family(GenericFamily::SansSerif, &installed).is_none());
    assert!(pick_generic_family(GenericFamily::Fantasy, &installed).is_none());
    assert!(FontStore::empty().generic_family(GenericFamily::Serif).is_none());
}

#[test]
fn every_catalog_entry_resolves_when_system_fonts_exist() {
    let store = FontStore::new(true, None);
    if store.face_count() == 0 {
        return;
    }
    for choice in &FONT_CATALOG {
        let f = store.resolve(choice).unwrap();
        assert!(!f.bytes.is_empty());
        assert!(!f.family_name.is_empty());
        assert!(f.weight > 0);
    }
}

#[test]
fn missing_catalog_fonts_land_on_their_generic_family() {
    let store = FontStore::new(true, None);
    for choice in &FONT_CATALOG {
        let Ok(f) = store.resolve(choice) else {
            continue;
        };
        if f.exact {
            continue;
        }
        if let Some(generic) = store.generic_family(choice.generic) {
            assert!(
                f.family_name.eq_ignore_ascii_case(generic),
                "{} resolved to {} instead of {generic}",
                choice.family,
                f.family_name
            );
        }
    }
}

#[test]
fn serif_sans_and_monospace_entries_stay_distinct() {
    let store = FontStore::new(true, None);
    let classes = [
        GenericFamily::SansSerif,
        GenericFamily::Serif,
        GenericFamily::Monospace,
    ];
    let Some(names) = classes
        .iter()
        .map(|g| store.generic_family(*g).map(str::to_owned))
        .collect::<Option<Vec<_>>>()
    else {
        return;
    };
    if names[0] == names[1] || names[1] == names[2] || names[0] == names[2] {
        return;
    }

    let resolved_for = |g: GenericFamily| {
        let choice = FONT_CATALOG.iter().find(|c| c.generic == g).unwrap();
        let f = store.resolve(choice).unwrap();
        if f.exact { None } else { Some(f.family_name) }
    };
    let picked: Vec<_> = classes.iter().filter_map(|g| resolved_for(*g)).collect();
    for (i, a) in picked.iter().enumerate() {
        for b in &picked[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
