//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and return (register request, auth response)
async fn register_user(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Register two users and an accepted swap between them.
/// Returns (sender auth, receiver auth, swap id).
async fn accepted_swap(server: &TestServer) -> (AuthResponse, AuthResponse, String) {
    let (_, sender) = register_user(server).await;
    let (_, receiver) = register_user(server).await;

    let response = server
        .post_auth(
            "/api/swaps",
            &sender.access_token,
            &CreateSwapRequest::to_user(&receiver.user.id),
        )
        .await
        .unwrap();
    let swap: SwapResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/swaps/{}", swap.id),
            &receiver.access_token,
            &UpdateSwapStatusRequest {
                status: "accepted".to_string(),
            },
        )
        .await
        .unwrap();
    let swap: SwapResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(swap.status, "accepted");

    (sender, receiver, swap.id)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.name, request.name);
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "user");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "alllowercase1".to_string();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.name, register_req.name);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "WrongPass123".to_string(),
    };

    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .post(
            "/api/auth/refresh",
            &RefreshTokenRequest {
                refresh_token: auth.refresh_token.clone(),
            },
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(refreshed.user.id, auth.user.id);
    assert!(!refreshed.access_token.is_empty());
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .post(
            "/api/auth/refresh",
            &RefreshTokenRequest {
                refresh_token: auth.access_token.clone(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register_user(&server).await;

    let response = server
        .get_auth("/api/users/profile", &auth.access_token)
        .await
        .unwrap();
    let profile: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.email, request.email);
    assert_eq!(profile.location.as_deref(), Some("Testville"));
}

#[tokio::test]
async fn test_get_profile_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/users/profile").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let update = UpdateProfileRequest {
        name: "Renamed User".to_string(),
        location: Some("New City".to_string()),
        availability: Some("weekends".to_string()),
    };
    let response = server
        .put_auth("/api/users/profile", &auth.access_token, &update)
        .await
        .unwrap();
    let profile: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.name, "Renamed User");
    assert_eq!(profile.location.as_deref(), Some("New City"));
    assert_eq!(profile.availability.as_deref(), Some("weekends"));
}

// ============================================================================
// Skill Tests
// ============================================================================

#[tokio::test]
async fn test_add_and_list_skills() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/skills",
            &auth.access_token,
            &CreateSkillRequest::offered("Woodworking"),
        )
        .await
        .unwrap();
    let skill: SkillResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(skill.kind, "offered");
    assert!(skill.is_approved);

    server
        .post_auth(
            "/api/skills",
            &auth.access_token,
            &CreateSkillRequest::wanted("Pottery"),
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/skills", &auth.access_token)
        .await
        .unwrap();
    let skills: Vec<SkillResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(skills.len(), 2);
    // Ordered by kind then name: offered before wanted
    assert_eq!(skills[0].kind, "offered");
    assert_eq!(skills[1].kind, "wanted");
}

#[tokio::test]
async fn test_add_skill_invalid_kind() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = CreateSkillRequest {
        name: "Juggling".to_string(),
        kind: "mastered".to_string(),
    };
    let response = server
        .post_auth("/api/skills", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_skill() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/skills",
            &auth.access_token,
            &CreateSkillRequest::offered("Baking"),
        )
        .await
        .unwrap();
    let skill: SkillResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/skills/{}", skill.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/skills", &auth.access_token)
        .await
        .unwrap();
    let skills: Vec<SkillResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(skills.is_empty());
}

#[tokio::test]
async fn test_delete_other_users_skill() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_user(&server).await;
    let (_, intruder) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/skills",
            &owner.access_token,
            &CreateSkillRequest::offered("Chess"),
        )
        .await
        .unwrap();
    let skill: SkillResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/skills/{}", skill.id), &intruder.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// User Search / Public Profile Tests
// ============================================================================

#[tokio::test]
async fn test_search_users_by_skill() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, searcher) = register_user(&server).await;
    let (_, target) = register_user(&server).await;

    // Give the target a distinctive skill
    let skill_name = format!("Glassblowing-{}", target.user.id);
    server
        .post_auth(
            "/api/skills",
            &target.access_token,
            &CreateSkillRequest::offered(&skill_name),
        )
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!("/api/users/search?skill={skill_name}"),
            &searcher.access_token,
        )
        .await
        .unwrap();
    let results: Vec<SearchUserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, target.user.id);
    assert!(results[0].skills.contains(&skill_name));
}

#[tokio::test]
async fn test_search_excludes_self() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register_user(&server).await;

    let response = server
        .get_auth(
            &format!("/api/users/search?name={}", request.name),
            &auth.access_token,
        )
        .await
        .unwrap();
    let results: Vec<SearchUserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(results.iter().all(|user| user.id != auth.user.id));
}

#[tokio::test]
async fn test_get_public_profile_with_skills() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, viewer) = register_user(&server).await;
    let (_, target) = register_user(&server).await;

    server
        .post_auth(
            "/api/skills",
            &target.access_token,
            &CreateSkillRequest::offered("Cooking"),
        )
        .await
        .unwrap();
    server
        .post_auth(
            "/api/skills",
            &target.access_token,
            &CreateSkillRequest::wanted("Welding"),
        )
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!("/api/users/{}", target.user.id),
            &viewer.access_token,
        )
        .await
        .unwrap();
    let profile: PublicProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.id, target.user.id);
    assert_eq!(profile.skills_offered, vec!["Cooking".to_string()]);
    assert_eq!(profile.skills_wanted, vec!["Welding".to_string()]);
}

#[tokio::test]
async fn test_get_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .get_auth("/api/users/1", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Swap Tests
// ============================================================================

#[tokio::test]
async fn test_create_swap() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, sender) = register_user(&server).await;
    let (_, receiver) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/swaps",
            &sender.access_token,
            &CreateSwapRequest::to_user(&receiver.user.id),
        )
        .await
        .unwrap();
    let swap: SwapResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(swap.sender_id, sender.user.id);
    assert_eq!(swap.receiver_id, receiver.user.id);
    assert_eq!(swap.status, "pending");
}

#[tokio::test]
async fn test_create_swap_unknown_receiver() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, sender) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/swaps",
            &sender.access_token,
            &CreateSwapRequest::to_user("1"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_swap_with_self() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, sender) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/swaps",
            &sender.access_token,
            &CreateSwapRequest::to_user(&sender.user.id),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_swaps_shows_both_parties() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (sender, receiver, swap_id) = accepted_swap(&server).await;

    for token in [&sender.access_token, &receiver.access_token] {
        let response = server.get_auth("/api/swaps", token).await.unwrap();
        let swaps: Vec<SwapDetailResponse> = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(swaps.iter().any(|s| s.id == swap_id));
    }
}

#[tokio::test]
async fn test_update_swap_status_by_sender_fails() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, sender) = register_user(&server).await;
    let (_, receiver) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/swaps",
            &sender.access_token,
            &CreateSwapRequest::to_user(&receiver.user.id),
        )
        .await
        .unwrap();
    let swap: SwapResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Only the receiver may decide
    let response = server
        .put_auth(
            &format!("/api/swaps/{}", swap.id),
            &sender.access_token,
            &UpdateSwapStatusRequest {
                status: "accepted".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_swap_status_invalid_value() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, sender) = register_user(&server).await;
    let (_, receiver) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/swaps",
            &sender.access_token,
            &CreateSwapRequest::to_user(&receiver.user.id),
        )
        .await
        .unwrap();
    let swap: SwapResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/swaps/{}", swap.id),
            &receiver.access_token,
            &UpdateSwapStatusRequest {
                status: "finished".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_swap() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (sender, _, swap_id) = accepted_swap(&server).await;

    let response = server
        .delete_auth(&format!("/api/swaps/{swap_id}"), &sender.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/swaps", &sender.access_token)
        .await
        .unwrap();
    let swaps: Vec<SwapDetailResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(swaps.iter().all(|s| s.id != swap_id));
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_send_and_list_messages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (sender, receiver, swap_id) = accepted_swap(&server).await;

    let response = server
        .post_auth(
            "/api/messages",
            &sender.access_token,
            &SendMessageRequest {
                swap_id: swap_id.clone(),
                message: "Hello there!".to_string(),
            },
        )
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(message.sender_id, sender.user.id);
    assert_eq!(message.receiver_id, receiver.user.id);
    assert!(!message.is_read);

    let response = server
        .get_auth(
            &format!("/api/messages/swap/{swap_id}"),
            &receiver.access_token,
        )
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message, "Hello there!");
}

#[tokio::test]
async fn test_messages_denied_for_outsider() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, swap_id) = accepted_swap(&server).await;
    let (_, outsider) = register_user(&server).await;

    let response = server
        .get_auth(
            &format!("/api/messages/swap/{swap_id}"),
            &outsider.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth(
            "/api/messages",
            &outsider.access_token,
            &SendMessageRequest {
                swap_id,
                message: "Let me in".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_mark_messages_read() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (sender, receiver, swap_id) = accepted_swap(&server).await;

    server
        .post_auth(
            "/api/messages",
            &sender.access_token,
            &SendMessageRequest {
                swap_id: swap_id.clone(),
                message: "First".to_string(),
            },
        )
        .await
        .unwrap();
    server
        .post_auth(
            "/api/messages",
            &sender.access_token,
            &SendMessageRequest {
                swap_id: swap_id.clone(),
                message: "Second".to_string(),
            },
        )
        .await
        .unwrap();

    let response = server
        .put_auth(
            &format!("/api/messages/read/{swap_id}"),
            &receiver.access_token,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    let result: MarkReadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.updated, 2);

    let response = server
        .get_auth(
            &format!("/api/messages/swap/{swap_id}"),
            &receiver.access_token,
        )
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(messages.iter().all(|m| m.is_read));
}

// ============================================================================
// Rating Tests
// ============================================================================

#[tokio::test]
async fn test_add_rating() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (sender, receiver, swap_id) = accepted_swap(&server).await;

    let response = server
        .post_auth(
            "/api/ratings",
            &sender.access_token,
            &CreateRatingRequest {
                swap_id: swap_id.clone(),
                rated_user: receiver.user.id.clone(),
                score: 5,
                comment: Some("Great swap".to_string()),
            },
        )
        .await
        .unwrap();
    let rating: RatingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(rating.rated_by, sender.user.id);
    assert_eq!(rating.rated_user, receiver.user.id);
    assert_eq!(rating.score, 5);
}

#[tokio::test]
async fn test_duplicate_rating_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (sender, receiver, swap_id) = accepted_swap(&server).await;

    let request = CreateRatingRequest {
        swap_id,
        rated_user: receiver.user.id.clone(),
        score: 4,
        comment: None,
    };

    let response = server
        .post_auth("/api/ratings", &sender.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/ratings", &sender.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_rating_requires_participant() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, receiver, swap_id) = accepted_swap(&server).await;
    let (_, outsider) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/ratings",
            &outsider.access_token,
            &CreateRatingRequest {
                swap_id,
                rated_user: receiver.user.id.clone(),
                score: 1,
                comment: None,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_list_received_ratings_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (sender, receiver, swap_id) = accepted_swap(&server).await;

    server
        .post_auth(
            "/api/ratings",
            &sender.access_token,
            &CreateRatingRequest {
                swap_id,
                rated_user: receiver.user.id.clone(),
                score: 3,
                comment: None,
            },
        )
        .await
        .unwrap();

    // No auth required for received ratings
    let response = server
        .get(&format!("/api/ratings/user/{}", receiver.user.id))
        .await
        .unwrap();
    let ratings: Vec<RatingReceivedResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].score, 3);
    assert_eq!(ratings[0].rater_name, sender.user.name);
}

// ============================================================================
// Admin Gating Tests
// ============================================================================

#[tokio::test]
async fn test_admin_routes_denied_for_regular_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    for path in [
        "/api/admin/users",
        "/api/admin/swaps",
        "/api/admin/reports",
        "/api/admin/reports/user-activity",
        "/api/admin/reports/feedback-logs",
        "/api/admin/reports/swap-stats",
    ] {
        let response = server.get_auth(path, &auth.access_token).await.unwrap();
        assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    }
}

#[tokio::test]
async fn test_admin_routes_require_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/admin/users").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
