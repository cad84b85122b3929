/// Split a comma-separated target list, dropping empty entries
pub fn parse_target_list(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_list() {
        assert_eq!(parse_target_list("api"), vec!["api"]);
        assert_eq!(parse_target_list("api, worker"), vec!["api", "worker"]);
        assert_eq!(parse_target_list("api,,worker,"), vec!["api", "worker"]);
        assert!(parse_target_list("").is_empty());
    }
}
