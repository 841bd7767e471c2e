use super::*;

#[test]
fn no_filter_lists_every_skill() {
    assert_eq!(filtered_skills(None).len(), SKILLS.len());
}

#[test]
fn filter_keeps_only_that_category() {
    let backend = filtered_skills(Some(SkillCategory::Backend));
    assert_eq!(backend.iter().map(|s| s.name).collect::<Vec<_>>(), vec!["Node.js", "Express"]);
}

#[test]
fn every_category_has_skills() {
    for category in SkillCategory::ALL {
        assert!(!filtered_skills(Some(category)).is_empty(), "{category:?}");
    }
}

#[test]
fn clicking_active_category_clears_filter() {
    let f = toggle_filter(None, SkillCategory::Frontend);
    assert_eq!(f, Some(SkillCategory::Frontend));
    assert_eq!(toggle_filter(f, SkillCategory::Database), Some(SkillCategory::Database));
    assert_eq!(toggle_filter(f, SkillCategory::Frontend), None);
}

#[test]
fn level_color_falls_back_to_middle_shade() {
    assert_eq!(level_color(0), level_color(3));
    assert_eq!(level_color(9), level_color(3));
    assert_ne!(level_color(5), level_color(3));
}

#[test]
fn level_percent_is_clamped() {
    assert_eq!(level_percent(1), 20);
    assert_eq!(level_percent(5), 100);
    assert_eq!(level_percent(0), 20);
    assert_eq!(level_percent(7), 100);
}

#[test]
fn one_experience_entry_open_at_a_time() {
    let open = toggle_expanded(None, 0);
    assert_eq!(open, Some(0));
    assert_eq!(toggle_expanded(open, 1), Some(1));
    assert_eq!(toggle_expanded(open, 0), None);
}

#[test]
fn carousel_wraps_both_ways() {
    let mut c = Carousel::default();
    c.prev(PROJECTS.len());
    assert_eq!(c.index, PROJECTS.len() - 1);
    c.next(PROJECTS.len());
    assert_eq!(c.index, 0);
}

#[test]
fn carousel_step_closes_details() {
    let mut c = Carousel::default();
    c.toggle_details();
    assert!(c.details_open);
    c.next(PROJECTS.len());
    assert!(!c.details_open);
}

#[test]
fn carousel_jump_ignores_out_of_range() {
    let mut c = Carousel::default();
    c.jump(2, PROJECTS.len());
    assert_eq!(c.index, 2);
    c.jump(9, PROJECTS.len());
    assert_eq!(c.index, 2);
}

#[test]
fn carousel_with_no_items_stays_put() {
    let mut c = Carousel::default();
    c.next(0);
    c.prev(0);
    assert_eq!(c.index, 0);
}

#[test]
fn every_project_links_somewhere() {
    for project in PROJECTS {
        assert!(project.github_url.is_some() || project.live_url.is_some(), "{}", project.title);
        assert!(project.color.starts_with('#'));
    }
}
