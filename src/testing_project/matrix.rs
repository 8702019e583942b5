use super::model::TestingProject;
use super::variants::{
    AdditionalDependency, AdditionalFraction, Autodetection, Dependencies, IncludedTechnology,
    Packaging,
};

/// Every subset of the included technologies, smallest first
fn technology_subsets() -> Vec<Vec<IncludedTechnology>> {
    let all = IncludedTechnology::ALL;
    (0u32..(1 << all.len()))
        .map(|mask| {
            all.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, technology)| *technology)
                .collect()
        })
        .collect()
}

/// All testing projects that pass construction-time validation
pub fn all_valid_projects() -> Vec<TestingProject> {
    let subsets = technology_subsets();
    let mut projects = Vec::new();
    for packaging in Packaging::ALL {
        for dependencies in Dependencies::ALL {
            for autodetection in Autodetection::ALL {
                for technologies in &subsets {
                    for additional_dependency in AdditionalDependency::ALL {
                        for additional_fraction in AdditionalFraction::ALL {
                            if let Ok(project) = TestingProject::new(
                                *packaging,
                                *dependencies,
                                *autodetection,
                                technologies,
                                *additional_dependency,
                                *additional_fraction,
                            ) {
                                projects.push(project);
                            }
                        }
                    }
                }
            }
        }
    }
    projects
}
