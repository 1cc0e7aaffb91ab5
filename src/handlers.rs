use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::{StatusCode, Uri},
    Extension, Json,
};

use crate::{
    authentication::{hash_password_argon2, issue_session_token, verify_password_argon2, MaybeUser},
    data_formats::{
        ArticleDetailResponse, ArticleListResponse, ArticleResponse, CommentRequest,
        CommentResponse, CreateArticleRequest, LikeResponse, LoginRequest, MessageResponse,
        PageQueryParams, PageResponse, RegisterRequest, UserResponse,
    },
    db_helpers::{
        count_likes_for_article, delete_session, get_article_by_id, get_comments_for_article,
        get_user_by_phone, insert_article, insert_comment, insert_session, insert_user,
        list_articles_page, purge_expired_sessions, toggle_like_in_db,
    },
    errors::{RequestError, RequestErrorJsonWrapper},
    AppContext, JsonResponse,
};

type JsonResult<T> = Result<Json<T>, JsonResponse<RequestErrorJsonWrapper>>;
type CreatedResult<T> = Result<JsonResponse<T>, JsonResponse<RequestErrorJsonWrapper>>;

// ----------------- Helper Handlers -----------------
pub async fn alive() -> &'static str {
    "alive"
}

pub async fn not_found(uri: Uri) -> JsonResponse<RequestErrorJsonWrapper> {
    (
        StatusCode::NOT_FOUND,
        Json(RequestErrorJsonWrapper::new(&format!(
            "URL {} provided was not found",
            uri
        ))),
    )
}

// ----------------- Static Page Handlers -----------------
// Template rendering lives outside this service; these routes hand the
// client the page identity and nothing else.
pub async fn home() -> Json<PageResponse> {
    Json(PageResponse::new("home"))
}

pub async fn bulls() -> Json<PageResponse> {
    Json(PageResponse::new("bulls"))
}

pub async fn podcasts() -> Json<PageResponse> {
    Json(PageResponse::new("podcasts"))
}

pub async fn kingdom_videos() -> Json<PageResponse> {
    Json(PageResponse::new("kingdom_videos"))
}

pub async fn anointing_streams() -> Json<PageResponse> {
    Json(PageResponse::new("anointing_streams"))
}

// ----------------- Auth Handlers -----------------
pub async fn register_user(
    Extension(ctx): Extension<Arc<AppContext>>,
    Json(request): Json<RegisterRequest>,
) -> CreatedResult<UserResponse> {
    if request.name.trim().is_empty()
        || request.phone_number.trim().is_empty()
        || request.password.is_empty()
        || request.confirm_password.is_empty()
    {
        return Err(RequestError::Validation("All fields are required").to_json_response());
    }
    if request.password != request.confirm_password {
        return Err(RequestError::Validation("Passwords do not match").to_json_response());
    }

    if get_user_by_phone(&ctx.pool, &request.phone_number)
        .await
        .map_err(|e| e.to_json_response())?
        .is_some()
    {
        return Err(RequestError::DuplicateUser.to_json_response());
    }

    let password_hash = hash_password_argon2(request.password)
        .await
        .map_err(|_| RequestError::ServerError.to_json_response())?;

    let user = insert_user(&ctx.pool, &request.name, &request.phone_number, &password_hash)
        .await
        .map_err(|e| {
            // Two registrations can race past the lookup above; the UNIQUE
            // constraint still reports the conflict.
            if let RequestError::DatabaseError(sqlx::Error::Database(e)) = &e {
                if e.message().contains("UNIQUE constraint failed") {
                    return RequestError::DuplicateUser.to_json_response();
                }
            }
            e.to_json_response()
        })?;

    tracing::info!(user_id = user.id, "registered new user");
    // Registration does not log the user in; they go through /login next.
    Ok((StatusCode::CREATED, Json(UserResponse::new(user, None))))
}

pub async fn login_user(
    Extension(ctx): Extension<Arc<AppContext>>,
    Json(request): Json<LoginRequest>,
) -> JsonResult<UserResponse> {
    let user = get_user_by_phone(&ctx.pool, &request.phone_number)
        .await
        .map_err(|e| e.to_json_response())?;
    let user = match user {
        Some(user) => user,
        None => return Err(RequestError::UserNotFound.to_json_response()),
    };

    let is_password_correct = verify_password_argon2(request.password, user.password.clone())
        .await
        .map_err(|_| RequestError::ServerError.to_json_response())?;
    if !is_password_correct {
        return Err(RequestError::InvalidCredentials.to_json_response());
    }

    let token = issue_session_token(&ctx.session_secret, user.id)
        .map_err(|_| RequestError::ServerError.to_json_response())?;
    purge_expired_sessions(&ctx.pool)
        .await
        .map_err(|e| e.to_json_response())?;
    insert_session(&ctx.pool, &token, user.id)
        .await
        .map_err(|e| e.to_json_response())?;

    tracing::info!(user_id = user.id, "user logged in");
    Ok(Json(UserResponse::new(user, Some(token))))
}

pub async fn logout_user(
    Extension(ctx): Extension<Arc<AppContext>>,
    maybe_user: MaybeUser,
) -> JsonResult<MessageResponse> {
    let auth = maybe_user.require().map_err(|e| e.to_json_response())?;
    delete_session(&ctx.pool, &auth.token)
        .await
        .map_err(|e| e.to_json_response())?;
    Ok(Json(MessageResponse::new("Logged out")))
}

// ----------------- Article Handlers -----------------
pub async fn create_article(
    Extension(ctx): Extension<Arc<AppContext>>,
    maybe_user: MaybeUser,
    Json(request): Json<CreateArticleRequest>,
) -> CreatedResult<ArticleResponse> {
    maybe_user.require().map_err(|e| e.to_json_response())?;

    if request.author.trim().is_empty()
        || request.title.trim().is_empty()
        || request.subtitle.trim().is_empty()
        || request.body.trim().is_empty()
    {
        return Err(
            RequestError::Validation("Author, title, subtitle and body are required")
                .to_json_response(),
        );
    }

    let article = insert_article(&ctx.pool, &request)
        .await
        .map_err(|e| e.to_json_response())?;
    tracing::info!(article_id = article.id, "article published");
    Ok((StatusCode::CREATED, Json(ArticleResponse::new(article))))
}

pub async fn all_articles(
    Extension(ctx): Extension<Arc<AppContext>>,
    Query(params): Query<PageQueryParams>,
) -> JsonResult<ArticleListResponse> {
    // 1-based pages; anything below 1 reads as the first page so the SQL
    // offset can never go negative.
    let page = params.page.max(1);
    let (articles, has_more) = list_articles_page(&ctx.pool, page)
        .await
        .map_err(|e| e.to_json_response())?;
    let articles = articles.into_iter().map(ArticleResponse::new).collect();
    Ok(Json(ArticleListResponse {
        articles,
        page,
        has_more,
    }))
}

pub async fn single_article(
    Extension(ctx): Extension<Arc<AppContext>>,
    Path(article_id): Path<i64>,
) -> JsonResult<ArticleDetailResponse> {
    let article = get_article_by_id(&ctx.pool, article_id)
        .await
        .map_err(|e| e.to_json_response())?;
    let article = match article {
        Some(article) => article,
        None => return Err(RequestError::NotFound("Article not found").to_json_response()),
    };

    let comments = get_comments_for_article(&ctx.pool, article_id)
        .await
        .map_err(|e| e.to_json_response())?;
    let like_count = count_likes_for_article(&ctx.pool, article_id)
        .await
        .map_err(|e| e.to_json_response())?;

    Ok(Json(ArticleDetailResponse {
        article: ArticleResponse::new(article),
        comments: comments.into_iter().map(CommentResponse::new).collect(),
        like_count,
    }))
}

// ----------------- Interaction Handlers -----------------
pub async fn add_comment(
    Extension(ctx): Extension<Arc<AppContext>>,
    maybe_user: MaybeUser,
    Path(article_id): Path<i64>,
    Json(request): Json<CommentRequest>,
) -> CreatedResult<CommentResponse> {
    let auth = maybe_user.require().map_err(|e| e.to_json_response())?;

    if request.body.trim().is_empty() {
        return Err(RequestError::Validation("Comment text is required").to_json_response());
    }
    if get_article_by_id(&ctx.pool, article_id)
        .await
        .map_err(|e| e.to_json_response())?
        .is_none()
    {
        return Err(RequestError::NotFound("Article not found").to_json_response());
    }

    let comment = insert_comment(&ctx.pool, auth.user.id, article_id, &request.body)
        .await
        .map_err(|e| e.to_json_response())?;
    Ok((StatusCode::CREATED, Json(CommentResponse::new(comment))))
}

pub async fn toggle_like(
    Extension(ctx): Extension<Arc<AppContext>>,
    maybe_user: MaybeUser,
    Path(article_id): Path<i64>,
) -> JsonResult<LikeResponse> {
    let auth = maybe_user.require().map_err(|e| e.to_json_response())?;

    if get_article_by_id(&ctx.pool, article_id)
        .await
        .map_err(|e| e.to_json_response())?
        .is_none()
    {
        return Err(RequestError::NotFound("Article not found").to_json_response());
    }

    let liked = toggle_like_in_db(&ctx.pool, auth.user.id, article_id)
        .await
        .map_err(|e| e.to_json_response())?;
    let like_count = count_likes_for_article(&ctx.pool, article_id)
        .await
        .map_err(|e| e.to_json_response())?;

    Ok(Json(LikeResponse {
        article_id,
        liked,
        like_count,
    }))
}
