use super::prelude::*;

/// Finds the GitLab username that belongs to `email`.
///
/// Usernames that follow the `<local part>_<domain>` convention match
/// directly, also with every `.` replaced by `_`. Otherwise the local
/// part is split at the first `.` into a first and last name and the
/// single username containing both is picked. No match or more than one
/// match is an error.
pub fn resolve_username<'a, I>(email: &EmailAddress, usernames: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let usernames: Vec<&str> = usernames.into_iter().collect();

    for derived in derived_usernames(email) {
        if usernames.contains(&derived.as_str()) {
            log::debug!("Username {derived} matches {email} by convention");
            return Ok(derived);
        }
    }

    let Some((first_name, last_name)) = email.local_part().split_once('.') else {
        return Err(Error::UnparseableIdentity {
            email: email.clone(),
        });
    };

    let mut candidates: Vec<&str> = usernames
        .into_iter()
        .filter(|username| username.contains(first_name))
        .filter(|username| username.contains(last_name))
        .collect();
    candidates.sort_unstable();
    candidates.dedup();

    match candidates.len() {
        1 => {
            let username = candidates[0];
            log::debug!("Username {username} matches {email} by name");
            Ok(username.to_owned())
        }
        0 => Err(Error::NoMatchingUsername {
            email: email.clone(),
        }),
        _ => Err(Error::AmbiguousUsername {
            email: email.clone(),
            candidates: candidates.into_iter().map(ToOwned::to_owned).collect(),
        }),
    }
}

/// Usernames derived from `email` by naming convention, most specific first.
fn derived_usernames(email: &EmailAddress) -> Vec<String> {
    let derived = email.as_str().replace('@', "_");
    let sanitized = derived.replace('.', "_");
    if sanitized == derived {
        vec![derived]
    } else {
        vec![derived, sanitized]
    }
}
