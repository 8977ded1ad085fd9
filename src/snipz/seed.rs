//! First-run example snippets, written when no data file exists yet.

use crate::model::Snippet;

fn snippet(id: i64, title: &str, language: &str, code: &str, tags: &[&str]) -> Snippet {
    Snippet {
        id,
        title: title.to_string(),
        language: language.to_string(),
        code: code.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn seed_snippets() -> Vec<Snippet> {
    vec![
        snippet(
            1,
            "Распаковка tar.gz",
            "bash",
            "tar -xzvf archive.tar.gz",
            &["linux", "archive", "compression"],
        ),
        snippet(
            2,
            "Python HTTP сервер",
            "bash",
            "python -m http.server 8000",
            &["python", "server", "quick"],
        ),
        snippet(
            3,
            "Git отмена последнего коммита",
            "bash",
            "git reset --soft HEAD~1",
            &["git", "undo"],
        ),
        snippet(
            4,
            "Docker Compose шаблон",
            "yaml",
            r#"version: '3.8'
services:
  app:
    build: .
    ports:
      - "8000:8000"
    volumes:
      - .:/app
    environment:
      - DEBUG=true"#,
            &["docker", "template"],
        ),
        snippet(
            5,
            "Python virtualenv",
            "bash",
            r"# Создание
python -m venv venv

# Активация (Linux/Mac)
source venv/bin/activate

# Активация (Windows)
venv\Scripts\activate",
            &["python", "venv", "environment"],
        ),
        snippet(
            6,
            "SQL выборка с JOIN",
            "sql",
            "SELECT
    u.name,
    o.order_date,
    o.total
FROM users u
LEFT JOIN orders o ON u.id = o.user_id
WHERE o.total > 100
ORDER BY o.order_date DESC;",
            &["sql", "join", "query"],
        ),
        snippet(
            7,
            "Python декоратор таймера",
            "python",
            r#"import time
from functools import wraps

def timer(func):
    @wraps(func)
    def wrapper(*args, **kwargs):
        start = time.perf_counter()
        result = func(*args, **kwargs)
        elapsed = time.perf_counter() - start
        print(f"{func.__name__} took {elapsed:.4f}s")
        return result
    return wrapper

@timer
def slow_function():
    time.sleep(1)"#,
            &["python", "decorator", "performance"],
        ),
        snippet(
            8,
            "Найти большие файлы Linux",
            "bash",
            "find / -type f -size +100M 2>/dev/null | head -20",
            &["linux", "find", "disk"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique_and_records_complete() {
        let seeds = seed_snippets();
        let ids: HashSet<i64> = seeds.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), seeds.len());
        assert!(seeds.iter().all(|s| s.missing_fields().is_empty()));
    }

    #[test]
    fn seed_covers_several_languages() {
        let languages: HashSet<String> =
            seed_snippets().into_iter().map(|s| s.language).collect();
        assert!(languages.len() >= 3);
    }
}
