use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{id::Id, user::User};

/// A feed post. `name` and `avatar` are copied from the author at creation
/// time and never re-joined afterwards.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: Id<Post>,
    pub user_id: Id<User>,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub user_id: Id<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Id<Comment>,
    pub user_id: Id<User>,
    pub name: String,
    pub avatar: String,
    pub text: String,
    pub date: DateTime<Utc>,
}

impl Post {
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Id::generate(),
            user_id: author.id.clone(),
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: Utc::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn is_liked_by(&self, user_id: &Id<User>) -> bool {
        self.likes.iter().any(|like| &like.user_id == user_id)
    }

    /// Likes form a set keyed by user id; callers must check
    /// `is_liked_by` first. Newest like sits at index 0.
    pub fn add_like(&mut self, user_id: Id<User>) {
        self.likes.insert(0, Like { user_id });
    }

    /// Removes the first entry for `user_id`. With the one-like-per-user
    /// invariant this is the unique entry.
    pub fn remove_like(&mut self, user_id: &Id<User>) {
        if let Some(index) = self.likes.iter().position(|like| &like.user_id == user_id) {
            self.likes.remove(index);
        }
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn comment(&self, comment_id: &Id<Comment>) -> Option<&Comment> {
        self.comments.iter().find(|comment| &comment.id == comment_id)
    }

    /// Removes exactly the comment matching `comment_id`, never a sibling
    /// by the same author.
    pub fn remove_comment(&mut self, comment_id: &Id<Comment>) {
        self.comments.retain(|comment| &comment.id != comment_id);
    }
}

impl Comment {
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Id::generate(),
            user_id: author.id.clone(),
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            text,
            date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Comment, Post};
    use crate::domain::entities::{id::Id, user::User};

    fn author(name: &str) -> User {
        User::new(
            name.to_string(),
            format!("{name}@example.com"),
            "hash".to_string(),
            format!("https://www.gravatar.com/avatar/{name}"),
        )
    }

    #[test]
    fn test_new_post_snapshots_author() {
        let user = author("john");
        let post = Post::new(&user, "hello".to_string());

        assert_eq!(post.user_id, user.id);
        assert_eq!(post.name, "john");
        assert_eq!(post.avatar, user.avatar);
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_like_unlike_round_trip() {
        let user = author("john");
        let mut post = Post::new(&author("jane"), "hi".to_string());

        post.add_like(user.id.clone());
        assert!(post.is_liked_by(&user.id));

        post.remove_like(&user.id);
        assert!(!post.is_liked_by(&user.id));
        assert!(post.likes.is_empty());
    }

    #[test]
    fn test_likes_are_newest_first() {
        let first = author("first");
        let second = author("second");
        let mut post = Post::new(&author("jane"), "hi".to_string());

        post.add_like(first.id.clone());
        post.add_like(second.id.clone());

        assert_eq!(post.likes[0].user_id, second.id);
        assert_eq!(post.likes[1].user_id, first.id);
    }

    #[test]
    fn test_comments_are_newest_first() {
        let user = author("john");
        let mut post = Post::new(&user, "hi".to_string());

        post.add_comment(Comment::new(&user, "older".to_string()));
        post.add_comment(Comment::new(&user, "newer".to_string()));

        assert_eq!(post.comments[0].text, "newer");
        assert_eq!(post.comments[1].text, "older");
    }

    #[test]
    fn test_remove_comment_targets_exact_id() {
        // Two comments by the same author; removing the older one must not
        // touch the newer one.
        let user = author("john");
        let mut post = Post::new(&user, "hi".to_string());

        post.add_comment(Comment::new(&user, "older".to_string()));
        post.add_comment(Comment::new(&user, "newer".to_string()));
        let older_id = post.comments[1].id.clone();

        post.remove_comment(&older_id);

        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].text, "newer");
    }

    #[test]
    fn test_remove_unknown_comment_is_noop() {
        let user = author("john");
        let mut post = Post::new(&user, "hi".to_string());
        post.add_comment(Comment::new(&user, "only".to_string()));

        post.remove_comment(&Id::generate());

        assert_eq!(post.comments.len(), 1);
    }
}
