//! Deserialization tests for the repository models

#[cfg(test)]
mod tests {
    use crate::models::{GitHubRepo, GitHubRepoDetailed, MergeMethod};
    use serde_json::json;

    /// Helper to create a mock embedded repository (parent/source shape)
    fn mock_repo(id: u64, owner: &str, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "full_name": format!("{}/{}", owner, name),
            "description": "Upstream project",
            "private": false,
            "fork": false,
            "owner": {"login": owner, "id": id + 100, "type": "Organization"},
            "html_url": format!("https://github.com/{}/{}", owner, name),
            "default_branch": "main"
        })
    }

    /// Helper to create a minimal repository-detail payload with no detail-only fields
    fn mock_detailed_minimal() -> serde_json::Value {
        json!({
            "id": 42,
            "name": "widgets",
            "full_name": "octocat/widgets",
            "owner": {"login": "octocat", "id": 1}
        })
    }

    /// Helper to create a complete repository-detail payload for a fork
    fn mock_detailed_fork() -> serde_json::Value {
        json!({
            "id": 42,
            "name": "widgets",
            "full_name": "octocat/widgets",
            "description": "Fork of widgets",
            "private": false,
            "fork": true,
            "owner": {"login": "octocat", "id": 1, "type": "User"},
            "html_url": "https://github.com/octocat/widgets",
            "clone_url": "https://github.com/octocat/widgets.git",
            "default_branch": "main",
            "stargazers_count": 7,
            "forks_count": 1,
            "created_at": "2024-01-15T10:30:00Z",
            "pushed_at": "2024-02-01T08:00:00Z",
            "permissions": {"admin": true, "push": true, "pull": true},
            "allow_squash_merge": true,
            "allow_merge_commit": false,
            "allow_rebase_merge": false,
            "organization": {"login": "acme", "id": 500, "name": "Acme Corp"},
            "parent": mock_repo(10, "acme", "widgets"),
            "source": mock_repo(5, "upstream", "widgets"),
            "network_count": 3,
            "subscribers_count": 10,
            "watchers_count": 7,
            "topics": ["rust"]
        })
    }

    fn parse(value: serde_json::Value) -> GitHubRepoDetailed {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_merge_flags_default_to_false() {
        let repo = parse(mock_detailed_minimal());

        assert!(!repo.allow_squash_merge());
        assert!(!repo.allow_merge_commit());
        assert!(!repo.allow_rebase_merge());
        assert!(repo.allowed_merge_methods().is_empty());
    }

    #[test]
    fn test_null_merge_flags_default_to_false() {
        let mut value = mock_detailed_minimal();
        value["allow_squash_merge"] = serde_json::Value::Null;
        value["allow_rebase_merge"] = serde_json::Value::Null;

        let repo = parse(value);

        assert!(!repo.allow_squash_merge());
        assert!(!repo.allow_rebase_merge());
    }

    #[test]
    fn test_present_merge_flags_are_reported() {
        let repo = parse(mock_detailed_fork());

        assert!(repo.allow_squash_merge());
        assert!(!repo.allow_merge_commit());
        assert!(!repo.allow_rebase_merge());
        assert!(repo.allows(MergeMethod::Squash));
        assert!(!repo.allows(MergeMethod::Merge));
        assert_eq!(repo.allowed_merge_methods(), vec![MergeMethod::Squash]);
    }

    #[test]
    fn test_allowed_merge_methods_order() {
        let mut value = mock_detailed_minimal();
        value["allow_rebase_merge"] = json!(true);
        value["allow_squash_merge"] = json!(true);
        value["allow_merge_commit"] = json!(true);

        let repo = parse(value);

        assert_eq!(
            repo.allowed_merge_methods(),
            vec![MergeMethod::Merge, MergeMethod::Squash, MergeMethod::Rebase]
        );
    }

    #[test]
    fn test_missing_references_are_none() {
        let repo = parse(mock_detailed_minimal());

        assert!(repo.parent().is_none());
        assert!(repo.source().is_none());
        assert!(repo.organization().is_none());
        assert!(repo.network_count().is_none());
        assert!(repo.subscribers_count().is_none());
        assert_eq!(repo.fork_root().full_name, "octocat/widgets");
    }

    #[test]
    fn test_parent_matches_nested_deserialization() {
        let repo = parse(mock_detailed_fork());
        let expected: GitHubRepo = serde_json::from_value(mock_repo(10, "acme", "widgets")).unwrap();

        assert_eq!(repo.parent(), Some(&expected));
        assert_eq!(repo.source().unwrap().full_name, "upstream/widgets");
        assert_eq!(repo.fork_root().full_name, "upstream/widgets");
    }

    #[test]
    fn test_fork_root_falls_back_to_parent() {
        let mut value = mock_detailed_fork();
        value.as_object_mut().unwrap().remove("source");

        let repo = parse(value);

        assert!(repo.source().is_none());
        assert_eq!(repo.fork_root().full_name, "acme/widgets");
    }

    #[test]
    fn test_detail_fields_and_counts() {
        let repo = parse(mock_detailed_fork());

        let org = repo.organization().unwrap();
        assert_eq!(org.login, "acme");
        assert_eq!(org.display_name(), "Acme Corp");
        assert_eq!(repo.network_count(), Some(3));
        assert_eq!(repo.subscribers_count(), Some(10));
    }

    #[test]
    fn test_base_fields_are_flattened() {
        let repo = parse(mock_detailed_fork());

        assert_eq!(repo.repo().id, 42);
        assert_eq!(repo.repo().owner_login(), "octocat");
        assert!(repo.repo().is_fork());
        assert_eq!(repo.repo().stargazers_count, 7);
        assert_eq!(
            repo.repo().pushed_at.map(|d| d.to_rfc3339()),
            Some("2024-02-01T08:00:00+00:00".to_string())
        );
        assert!(repo.base().is_admin());
        assert!(repo.base().can_push());
        assert!(repo.base().can_pull());
    }

    #[test]
    fn test_missing_permissions_deny_access() {
        let repo = parse(mock_detailed_minimal());

        assert!(repo.base().permissions().is_none());
        assert!(!repo.base().is_admin());
        assert!(!repo.base().can_push());
        assert!(!repo.base().can_pull());
        assert!(!repo.repo().private);
        assert!(!repo.repo().archived);
    }

    #[test]
    fn test_partial_permissions_default_to_false() {
        let mut value = mock_detailed_minimal();
        value["permissions"] = json!({"pull": true});

        let repo = parse(value);

        assert!(repo.base().can_pull());
        assert!(!repo.base().can_push());
        assert!(!repo.base().is_admin());
    }

    #[test]
    fn test_round_trip_preserves_absence() {
        for value in [mock_detailed_minimal(), mock_detailed_fork()] {
            let original = parse(value);
            let json = original.to_json_pretty().unwrap();
            let reparsed = GitHubRepoDetailed::from_json(&json).unwrap();

            assert_eq!(reparsed, original);
            assert_eq!(reparsed.allow_merge_commit(), original.allow_merge_commit());
            assert_eq!(reparsed.parent().is_some(), original.parent().is_some());
            assert_eq!(reparsed.source().is_some(), original.source().is_some());
        }
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let repo = parse(mock_detailed_minimal());
        let value = serde_json::to_value(&repo).unwrap();

        assert!(value.get("allow_squash_merge").is_none());
        assert!(value.get("parent").is_none());
        assert!(value.get("permissions").is_none());
        assert_eq!(value["full_name"], "octocat/widgets");
    }

    #[test]
    fn test_builder_matches_parsed_payload() {
        let parsed = parse(mock_detailed_fork());
        let built = GitHubRepoDetailed::new(parsed.base().clone())
            .with_merge_settings(Some(true), Some(false), Some(false))
            .with_organization(parsed.organization().unwrap().clone())
            .with_fork_lineage(
                parsed.parent().unwrap().clone(),
                parsed.source().unwrap().clone(),
            )
            .with_counts(Some(3), Some(10));

        assert_eq!(built, parsed);
    }

    #[test]
    fn test_from_reader() {
        let bytes = serde_json::to_vec(&mock_detailed_fork()).unwrap();
        let repo = GitHubRepoDetailed::from_reader(bytes.as_slice()).unwrap();

        assert_eq!(repo.repo().full_name, "octocat/widgets");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = GitHubRepoDetailed::from_json("{\"id\": 1").unwrap_err();
        assert!(matches!(err, crate::GitHubModelError::Parse(_)));
        assert!(err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn test_missing_required_base_field_is_error() {
        let result = GitHubRepoDetailed::from_json(r#"{"id": 1, "name": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_method_serialization() {
        assert_eq!(serde_json::to_value(MergeMethod::Squash).unwrap(), json!("squash"));
        assert_eq!(MergeMethod::Rebase.to_string(), "rebase");
        let parsed: MergeMethod = serde_json::from_value(json!("merge")).unwrap();
        assert_eq!(parsed, MergeMethod::Merge);
    }

    #[test]
    fn test_owner_account_type() {
        let repo = parse(mock_detailed_fork());

        assert!(!repo.repo().owner.is_organization());
        assert!(repo.parent().unwrap().owner.is_organization());
    }
}
