use chrono::{DateTime, SecondsFormat};
use entity::prelude::*;
use folio::modules::content::{ExportFormatter, LocalOverrideCache};
use folio::modules::storage::MemoryKvStore;
use proptest::prelude::*;
use std::sync::Arc;

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:/'\"-]{0,40}"
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of(text())
}

/// Millisecond `Z` form as written by this crate, or hand-written second
/// precision as found in published files.
fn timestamp() -> impl Strategy<Value = Timestamp> {
    (0i64..4_102_444_800_000, any::<bool>()).prop_map(|(ms, by_hand)| {
        let instant = DateTime::from_timestamp_millis(ms).unwrap();
        if by_hand {
            Timestamp::parse(&instant.to_rfc3339_opts(SecondsFormat::Secs, true)).unwrap()
        } else {
            Timestamp::from(instant)
        }
    })
}

fn extra() -> impl Strategy<Value = serde_json::Map<String, serde_json::Value>> {
    prop::collection::btree_map("x[a-z]{1,8}", text(), 0..3).prop_map(|fields| {
        fields
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect()
    })
}

fn project() -> impl Strategy<Value = Project> {
    (
        any::<i64>(),
        text(),
        optional_text(),
        optional_text(),
        optional_text(),
        timestamp(),
        extra(),
    )
        .prop_map(|(id, title, description, github, demo, created_at, extra)| Project {
            id,
            title,
            description,
            github,
            demo,
            created_at,
            extra,
        })
}

fn blog_post() -> impl Strategy<Value = BlogPost> {
    (
        any::<i64>(),
        text(),
        optional_text(),
        text(),
        timestamp(),
        prop::option::of(timestamp()),
        extra(),
    )
        .prop_map(|(id, title, content, date, created_at, updated_at, extra)| BlogPost {
            id,
            title,
            content,
            date,
            created_at,
            updated_at,
            extra,
        })
}

fn contact() -> impl Strategy<Value = ContactLinks> {
    (
        optional_text(),
        optional_text(),
        optional_text(),
        optional_text(),
        optional_text(),
        optional_text(),
        extra(),
    )
        .prop_map(|(email, linkedin, github, twitter, instagram, website, extra)| ContactLinks {
            email,
            linkedin,
            github,
            twitter,
            instagram,
            website,
            extra,
        })
}

proptest! {
    #[test]
    fn test_projects_survive_cache_and_export(projects in prop::collection::vec(project(), 0..8)) {
        let cache = LocalOverrideCache::new(Arc::new(MemoryKvStore::new()));
        cache.save(&projects).unwrap();
        let loaded: Vec<Project> = cache.load().unwrap().unwrap();

        let exported = ExportFormatter::serialize(&loaded).unwrap();
        let reparsed: Vec<Project> = serde_json::from_str(&exported).unwrap();
        prop_assert_eq!(reparsed, projects);
    }

    #[test]
    fn test_posts_survive_cache_and_export(posts in prop::collection::vec(blog_post(), 0..8)) {
        let cache = LocalOverrideCache::new(Arc::new(MemoryKvStore::new()));
        cache.save(&posts).unwrap();
        let loaded: Vec<BlogPost> = cache.load().unwrap().unwrap();

        let exported = ExportFormatter::serialize(&loaded).unwrap();
        let reparsed: Vec<BlogPost> = serde_json::from_str(&exported).unwrap();
        prop_assert_eq!(reparsed, posts);
    }

    #[test]
    fn test_contact_survives_cache_and_export(links in contact()) {
        let cache = LocalOverrideCache::new(Arc::new(MemoryKvStore::new()));
        cache.save(&links).unwrap();
        let loaded: ContactLinks = cache.load().unwrap().unwrap();

        let exported = ExportFormatter::serialize(&loaded).unwrap();
        prop_assert_eq!(serde_json::from_str::<ContactLinks>(&exported).unwrap(), links);
    }
}
