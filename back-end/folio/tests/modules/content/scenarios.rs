#[cfg(test)]
mod tests {
    use crate::{TEST_SECRET, TestSite};
    use entity::prelude::*;
    use folio::modules::content::{
        ContentError, ExportFormatter, MutationOutcome, ScriptedPrompt, ToggleOutcome, render_view,
    };
    use folio::modules::storage::KvStore;

    const PUBLISHED_POSTS: &str = r#"[
        {"id": 1704067200000, "title": "Hello World", "content": "First post", "date": "January 1, 2024", "createdAt": "2024-01-01T00:00:00.000Z"},
        {"id": 1706745600000, "title": "Second Post", "date": "February 1, 2024", "createdAt": "2024-02-01T00:00:00.000Z"}
    ]"#;

    fn unlock() -> ScriptedPrompt {
        ScriptedPrompt::new().with_secret(TEST_SECRET)
    }

    #[test]
    fn test_first_project_on_empty_site() {
        let site = TestSite::new();
        let portfolio = site.portfolio();
        let mut projects = portfolio.projects().unwrap();

        assert_eq!(projects.enable_edit_mode(&mut unlock()).unwrap(), ToggleOutcome::Opened);
        let outcome = projects.create(&ProjectDraft::titled("Portfolio Site")).unwrap();
        assert!(matches!(outcome, MutationOutcome::Created { .. }));

        let card = render_view(projects.view());
        assert!(card.starts_with("Portfolio Site"));
        assert!(!card.contains("[GitHub]"));
        assert!(!card.contains("[Demo]"));

        let exported: serde_json::Value =
            serde_json::from_str(&projects.export().unwrap()).unwrap();
        let entries = exported.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["title"], "Portfolio Site");
        assert!(entries[0]["id"].is_i64());
        let created_at = entries[0]["createdAt"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    }

    #[test]
    fn test_wrong_secret_keeps_projects_locked() {
        let site = TestSite::new();
        site.publish(
            "projects.json",
            r#"[{"id": 1, "title": "Shipped", "createdAt": "2024-06-01T00:00:00.000Z"}]"#,
        );
        let portfolio = site.portfolio();
        let mut projects = portfolio.projects().unwrap();

        let err = projects
            .enable_edit_mode(&mut ScriptedPrompt::new().with_secret("guess"))
            .unwrap_err();
        assert!(matches!(err, ContentError::SecretMismatch(CollectionKind::Projects)));
        assert!(err.to_string().contains("password"));

        assert!(!projects.is_edit_mode_on().unwrap());
        assert_eq!(
            projects.create(&ProjectDraft::titled("Sneaky")).unwrap(),
            MutationOutcome::Locked
        );
        assert_eq!(projects.view(), projects.published());
    }

    #[test]
    fn test_cancelled_delete_keeps_entry() {
        let site = TestSite::new();
        site.publish("blogPosts.json", PUBLISHED_POSTS);
        let portfolio = site.portfolio();
        let mut blog = portfolio.blog().unwrap();
        blog.enable_edit_mode(&mut ScriptedPrompt::new()).unwrap();

        let outcome = blog
            .delete(1704067200000, &mut ScriptedPrompt::new().confirming(false))
            .unwrap();

        assert_eq!(outcome, MutationOutcome::Cancelled);
        assert_eq!(blog.view().len(), 2);
        assert!(!blog.has_override().unwrap());
    }

    #[test]
    fn test_no_cache_entry_shows_published_posts() {
        let site = TestSite::new();
        site.publish("blogPosts.json", PUBLISHED_POSTS);
        site.kv.put(b"blogPosts:edit_mode", b"true").unwrap();

        let blog = site.portfolio().blog().unwrap();

        assert!(blog.is_edit_mode_on().unwrap());
        assert!(!blog.has_override().unwrap());
        assert_eq!(blog.view().len(), 2);
        assert_eq!(blog.view()[0].title, "Hello World");
    }

    #[test]
    fn test_deleting_last_project_stays_deleted_after_reopen() {
        let site = TestSite::new();
        site.publish(
            "projects.json",
            r#"[{"id": 1, "title": "Shipped", "createdAt": "2024-06-01T00:00:00.000Z"}]"#,
        );
        let portfolio = site.portfolio();
        let mut projects = portfolio.projects().unwrap();
        projects.enable_edit_mode(&mut unlock()).unwrap();

        let outcome = projects
            .delete(1, &mut ScriptedPrompt::new().confirming(true))
            .unwrap();
        assert_eq!(outcome, MutationOutcome::Deleted { id: 1 });

        let reopened = portfolio.projects().unwrap();
        assert!(reopened.is_edit_mode_on().unwrap());
        assert!(reopened.view().is_empty());
        assert_eq!(reopened.export().unwrap(), "[]");
        assert_eq!(reopened.published().len(), 1);
    }

    #[test]
    fn test_toggle_off_then_on_restores_last_save() {
        let site = TestSite::new();
        site.publish("blogPosts.json", PUBLISHED_POSTS);
        let portfolio = site.portfolio();
        let mut blog = portfolio.blog().unwrap();
        let mut prompt = ScriptedPrompt::new();

        blog.toggle_edit_mode(&mut prompt).unwrap();
        blog.create(&BlogDraft::new("Draft", "Not yet published")).unwrap();
        let edited = blog.view().clone();

        assert_eq!(blog.toggle_edit_mode(&mut prompt).unwrap(), ToggleOutcome::Closed);
        assert_eq!(blog.view().len(), 2);

        assert_eq!(blog.toggle_edit_mode(&mut prompt).unwrap(), ToggleOutcome::Opened);
        assert_eq!(blog.view(), &edited);

        // A fresh session over the same store sees the same thing.
        assert_eq!(portfolio.blog().unwrap().view(), &edited);
    }

    #[test]
    fn test_update_and_delete_misses_are_noops() {
        let site = TestSite::new();
        site.publish("blogPosts.json", PUBLISHED_POSTS);
        let portfolio = site.portfolio();
        let mut blog = portfolio.blog().unwrap();
        blog.enable_edit_mode(&mut ScriptedPrompt::new()).unwrap();

        assert_eq!(
            blog.update(99, &BlogDraft::new("Ghost", "")).unwrap(),
            MutationOutcome::NotFound { id: 99 }
        );
        assert_eq!(
            blog.delete(99, &mut ScriptedPrompt::new().confirming(true)).unwrap(),
            MutationOutcome::NotFound { id: 99 }
        );
        assert_eq!(blog.view(), blog.published());
        assert!(!blog.has_override().unwrap());
    }

    #[test]
    fn test_blog_edit_keeps_position_and_date() {
        let site = TestSite::new();
        site.publish("blogPosts.json", PUBLISHED_POSTS);
        let portfolio = site.portfolio();
        let mut blog = portfolio.blog().unwrap();
        blog.enable_edit_mode(&mut ScriptedPrompt::new()).unwrap();

        blog.update(1704067200000, &BlogDraft::new("Hello, World", "Edited"))
            .unwrap();

        let first = &blog.view()[0];
        assert_eq!(first.title, "Hello, World");
        assert_eq!(first.date, "January 1, 2024");
        assert!(first.updated_at.is_some());
        assert_eq!(blog.view()[1], blog.published()[1]);
    }

    #[test]
    fn test_contact_replace_drops_omitted_links() {
        let site = TestSite::new();
        site.publish(
            "contactInfo.json",
            r#"{"email": "me@example.com", "github": "https://github.com/me"}"#,
        );
        let portfolio = site.portfolio();
        let mut contact = portfolio.contact().unwrap();
        contact.enable_edit_mode(&mut ScriptedPrompt::new()).unwrap();

        contact
            .replace(&ContactLinks {
                email: Some("new@example.com".into()),
                ..ContactLinks::default()
            })
            .unwrap();

        assert_eq!(contact.view().email.as_deref(), Some("new@example.com"));
        assert_eq!(contact.view().github, None);
        assert_eq!(
            ExportFormatter::serialize(contact.view()).unwrap(),
            "{\n  \"email\": \"new@example.com\"\n}"
        );
    }

    #[test]
    fn test_reset_reverts_to_published() {
        let site = TestSite::new();
        site.publish("blogPosts.json", PUBLISHED_POSTS);
        let portfolio = site.portfolio();
        let mut blog = portfolio.blog().unwrap();
        blog.enable_edit_mode(&mut ScriptedPrompt::new()).unwrap();
        blog.create(&BlogDraft::new("Throwaway", "")).unwrap();

        assert!(blog.discard_override().unwrap());
        assert_eq!(blog.view(), blog.published());
    }
}
