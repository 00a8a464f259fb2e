//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 저장소 추상화와 메모리 기반 기본 구현입니다.
//!
//! ## 특징
//!
//! - **추가/열거 전용**: 수정, 삭제 연산 없음
//! - **유일성 제약 없음**: 중복 판단은 `DuplicateDetector`가 담당
//! - **동기 API**: 호출자가 호출을 직렬화한다고 가정

use crate::domain::entities::users::User;

/// 사용자 컬렉션 저장소
///
/// 등록 서비스가 의존하는 유일한 가변 자원입니다.
/// 동시 환경에서는 호출자가 읽기-추가 구간 전체를 상호 배제로 감싸야 합니다.
pub trait UserStore {
    /// 사용자를 컬렉션 끝에 추가합니다.
    fn add(&mut self, user: User);

    /// 저장된 사용자를 추가된 순서대로 반환합니다.
    fn users(&self) -> &[User];
}

/// 메모리 기반 사용자 리포지토리
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기존 사용자 목록으로 초기화합니다.
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl UserStore for InMemoryUserRepository {
    fn add(&mut self, user: User) {
        log::debug!("Storing user #{}: {}", self.users.len() + 1, user.email);
        self.users.push(user);
    }

    fn users(&self) -> &[User] {
        &self.users
    }
}

impl UserStore for Vec<User> {
    fn add(&mut self, user: User) {
        self.push(user);
    }

    fn users(&self) -> &[User] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use crate::domain::entities::users::UserType;

    fn user(name: &str) -> User {
        User::new(
            name.to_string(),
            format!("{}@gmail.com", name.to_lowercase()),
            "Av. Juan G".to_string(),
            "+349 1122354215".to_string(),
            UserType::Normal,
            Decimal::ZERO,
        )
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut repo = InMemoryUserRepository::new();
        repo.add(user("Mike"));
        repo.add(user("Anna"));

        let names: Vec<&str> = repo.users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Mike", "Anna"]);
    }

    #[test]
    fn test_store_does_not_enforce_uniqueness() {
        let mut repo = InMemoryUserRepository::with_users(vec![user("Mike")]);
        repo.add(user("Mike"));

        assert_eq!(repo.users().len(), 2);
    }

    #[test]
    fn test_vec_is_a_store() {
        let mut users: Vec<User> = Vec::new();
        UserStore::add(&mut users, user("Mike"));

        assert_eq!(UserStore::users(&users).len(), 1);
    }
}
