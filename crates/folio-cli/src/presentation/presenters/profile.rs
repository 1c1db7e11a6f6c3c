use folio_types::Summary;

use crate::presentation::view_models::{CommandResultViewModel, EducationViewModel, ProfileViewModel};

use super::non_empty;

pub fn present_profile(summary: &Summary) -> CommandResultViewModel<ProfileViewModel> {
    let content = ProfileViewModel {
        name: summary.name.clone(),
        taglines: summary.taglines.clone(),
        bio: summary.bio.clone(),
        location: summary.location.clone(),
        email: non_empty(&summary.email),
        mailto: summary.mailto(),
        phone: non_empty(&summary.phone),
        tel: summary.tel(),
        resume_url: summary.resume_url.as_deref().and_then(non_empty),
        profile_image: summary.profile_image.as_deref().and_then(non_empty),
        github: summary.social.github.as_deref().and_then(non_empty),
        linkedin: summary.social.linkedin.as_deref().and_then(non_empty),
        education: summary.education.as_ref().map(|education| EducationViewModel {
            degree: education.degree.clone(),
            institution: education.institution.clone(),
            period: education.period.clone(),
            grade: education.grade.as_deref().and_then(non_empty),
        }),
    };

    CommandResultViewModel::new(content)
}
