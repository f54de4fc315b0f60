mod mixer;
