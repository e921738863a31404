mod limited;
mod properties;
mod unlimited;
