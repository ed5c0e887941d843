
#[cfg(test)]
mod transport_tests;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod dashboard_tests;


#[cfg(test)]
mod validation_tests;
