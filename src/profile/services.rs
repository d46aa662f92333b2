use crate::profile::dto::PutProfileRequest;
use crate::profile::repo_types::UserProfile;

pub(crate) fn build_profile(req: PutProfileRequest) -> Result<UserProfile, &'static str> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err("Please enter a name");
    }
    Ok(UserProfile {
        name: name.to_string(),
        age: req.age,
        gender: req.gender,
        height_cm: req.height_cm,
        weight_kg: req.weight_kg,
        email: req.email,
    })
}
